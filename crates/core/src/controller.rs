//! Active piece controller - movement, rotation and gravity for the falling piece
//!
//! One tick processes at most one movement-like event, in priority order:
//! right, left, rotate, down (soft drop or gravity). A held direction that its
//! repeat timer is still suppressing does not use up the tick.
//!
//! Every change follows the same rule: build the candidate cells, check them
//! against the board, and only then commit and re-register the piece. A rejected
//! candidate leaves the piece exactly as it was. A rejected downward move is the
//! lock signal.
//!
//! Releasing any of left, right or down resets both repeaters, so every key
//! still held afterwards starts over as a fresh press. Gravity keeps its timer.

use crate::board::{Board, PieceId};
use crate::config::RulesConfig;
use crate::pieces::{cells_at, next_rotation, PieceShape, ShapeCatalog};
use crate::repeat::{AutoRepeat, RepeatFire};
use crate::types::{PieceKind, RotationMode, TickInput};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
    /// Points awarded on lock; decays while the piece is in play
    pub placement_score: u32,
    decay_timer_ms: u32,
}

impl ActivePiece {
    pub fn new(id: PieceId, kind: PieceKind, (x, y): (i8, i8), placement_score: u32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            rotation: 0,
            placement_score,
            decay_timer_ms: 0,
        }
    }

    /// Absolute cells at the current position, or None if a coordinate overflows
    pub fn cells<C: ShapeCatalog>(&self, catalog: &C) -> Option<PieceShape> {
        cells_at(&catalog.shape(self.kind, self.rotation), self.x, self.y)
    }

    /// Age the placement score by one tick.
    ///
    /// Each time a full period has accumulated, `step` points are lost (floored
    /// at 0) and the timer starts over.
    pub fn age(&mut self, elapsed_ms: u32, step: u32, period_ms: u32) {
        self.decay_timer_ms = self.decay_timer_ms.saturating_add(elapsed_ms);
        if self.decay_timer_ms >= period_ms {
            self.decay_timer_ms = 0;
            self.placement_score = self.placement_score.saturating_sub(step);
        }
    }
}

/// True if every cell is inside the grid and either empty or owned by `owner`.
pub fn is_valid_position(board: &Board, owner: PieceId, cells: &[(i8, i8)]) -> bool {
    cells.iter().all(|&(x, y)| match board.cell_owner(x, y) {
        Ok(None) => true,
        Ok(Some(other)) => other == owner,
        Err(_) => false,
    })
}

/// Shift the piece by (dx, dy) if the target is valid
pub fn try_shift<C: ShapeCatalog>(
    piece: &mut ActivePiece,
    board: &mut Board,
    catalog: &C,
    dx: i8,
    dy: i8,
) -> bool {
    let (Some(x), Some(y)) = (piece.x.checked_add(dx), piece.y.checked_add(dy)) else {
        return false;
    };
    let Some(cells) = cells_at(&catalog.shape(piece.kind, piece.rotation), x, y) else {
        return false;
    };
    if !is_valid_position(board, piece.id, &cells)
        || board.register_piece(piece.id, piece.kind, &cells).is_err()
    {
        return false;
    }
    piece.x = x;
    piece.y = y;
    true
}

/// Rotate the piece to its next state if the kind allows it and the result is valid.
/// An illegal rotation is undone, leaving the previous state.
pub fn try_rotate<C: ShapeCatalog>(
    piece: &mut ActivePiece,
    board: &mut Board,
    catalog: &C,
) -> bool {
    let Some(next) = next_rotation(catalog.rotation_mode(piece.kind), piece.rotation) else {
        return false;
    };
    let Some(cells) = cells_at(&catalog.shape(piece.kind, next), piece.x, piece.y) else {
        return false;
    };
    if !is_valid_position(board, piece.id, &cells)
        || board.register_piece(piece.id, piece.kind, &cells).is_err()
    {
        return false;
    }
    piece.rotation = next;
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
}

/// Result of one controller step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// An input-driven move succeeded (move cue)
    pub moved: bool,
    /// A rotation succeeded
    pub rotated: bool,
    /// A downward move was rejected; the piece must lock
    pub lock: bool,
}

/// Input-repeat and gravity state for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    horizontal: AutoRepeat,
    horizontal_dir: Option<Horizontal>,
    soft_drop: AutoRepeat,
    /// Direction levels seen last tick, for release detection
    held: TickInput,
    gravity_timer_ms: u32,
    fall_interval_ms: u32,
}

impl Controller {
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            horizontal: AutoRepeat::new(config.horizontal_repeat),
            horizontal_dir: None,
            soft_drop: AutoRepeat::new(config.soft_drop_repeat),
            held: TickInput::IDLE,
            gravity_timer_ms: 0,
            fall_interval_ms: config.fall_interval_ms,
        }
    }

    /// Fresh timers for a new piece
    pub fn reset(&mut self) {
        self.horizontal.release();
        self.horizontal_dir = None;
        self.soft_drop.release();
        self.held = TickInput::IDLE;
        self.gravity_timer_ms = 0;
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    /// Process one tick of input and gravity for `piece`
    pub fn step<C: ShapeCatalog>(
        &mut self,
        piece: &mut ActivePiece,
        board: &mut Board,
        catalog: &C,
        input: TickInput,
        elapsed_ms: u32,
    ) -> StepOutcome {
        let released = (self.held.left && !input.left)
            || (self.held.right && !input.right)
            || (self.held.down && !input.down);
        self.held = TickInput {
            rotate: false,
            ..input
        };
        if released {
            self.horizontal.release();
            self.soft_drop.release();
        }

        let dir = if input.right {
            Some(Horizontal::Right)
        } else if input.left {
            Some(Horizontal::Left)
        } else {
            None
        };
        // Switching direction counts as a new press.
        if dir != self.horizontal_dir {
            self.horizontal.release();
            self.horizontal_dir = dir;
        }

        let horizontal = self.horizontal.update(dir.is_some(), elapsed_ms);
        let down = self.soft_drop.update(input.down, elapsed_ms);
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);

        let mut outcome = StepOutcome::default();

        if horizontal.fired() {
            let dx = match dir {
                Some(Horizontal::Right) => 1,
                Some(Horizontal::Left) => -1,
                None => 0,
            };
            outcome.moved = try_shift(piece, board, catalog, dx, 0);
            return outcome;
        }

        if input.rotate {
            if catalog.rotation_mode(piece.kind) != RotationMode::None {
                outcome.rotated = try_rotate(piece, board, catalog);
            }
            return outcome;
        }

        let gravity_due = self.gravity_timer_ms >= self.fall_interval_ms;
        if down.fired() || gravity_due {
            self.gravity_timer_ms = 0;
            if try_shift(piece, board, catalog, 0, -1) {
                // Only the initial press of soft drop gets a move cue.
                outcome.moved = down == RepeatFire::Pressed;
            } else {
                outcome.lock = true;
            }
        }

        outcome
    }
}
