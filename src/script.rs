//! Scripted player for headless runs.
//!
//! Picks a target column and a number of rotations for each new piece from its
//! id, then emits the key presses and releases a person would: rotate first,
//! steer to the column, hold soft drop. The events go through the same
//! [`KeySampler`](crate::input::KeySampler) a terminal host would use.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::core::{ActivePiece, PieceId};
use crate::types::BOARD_WIDTH;

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plan {
    piece: PieceId,
    target_x: i8,
    rotations: u8,
}

impl Plan {
    fn for_piece(piece: &ActivePiece) -> Self {
        Self {
            piece: piece.id,
            target_x: (piece.id.wrapping_mul(3) % BOARD_WIDTH as u32) as i8,
            rotations: (piece.id % 4) as u8,
        }
    }
}

/// Deterministic key script
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    plan: Option<Plan>,
    held: Vec<KeyCode>,
    /// Rotate was pressed last tick; release it before pressing again
    rotate_down: bool,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn press(&mut self, code: KeyCode, out: &mut Vec<KeyEvent>) {
        if !self.held.contains(&code) {
            self.held.push(code);
            out.push(key(code, KeyEventKind::Press));
        }
    }

    fn release_all_except(&mut self, keep: Option<KeyCode>, out: &mut Vec<KeyEvent>) {
        self.held.retain(|&code| {
            if Some(code) == keep {
                true
            } else {
                out.push(key(code, KeyEventKind::Release));
                false
            }
        });
    }

    /// Key events to deliver before the next tick
    pub fn keys_for(&mut self, active: Option<ActivePiece>) -> Vec<KeyEvent> {
        let mut out = Vec::new();
        let Some(piece) = active else {
            self.release_all_except(None, &mut out);
            return out;
        };

        let plan = match self.plan {
            Some(plan) if plan.piece == piece.id => plan,
            _ => {
                // New piece: let go of everything from the last one.
                self.release_all_except(None, &mut out);
                Plan::for_piece(&piece)
            }
        };
        self.plan = Some(plan);

        if self.rotate_down {
            self.rotate_down = false;
            out.push(key(KeyCode::Up, KeyEventKind::Release));
            return out;
        }

        if plan.rotations > 0 {
            self.plan = Some(Plan {
                rotations: plan.rotations - 1,
                ..plan
            });
            self.rotate_down = true;
            out.push(key(KeyCode::Up, KeyEventKind::Press));
            return out;
        }

        let code = if piece.x < plan.target_x {
            KeyCode::Right
        } else if piece.x > plan.target_x {
            KeyCode::Left
        } else {
            KeyCode::Down
        };
        self.release_all_except(Some(code), &mut out);
        self.press(code, &mut out);
        out
    }
}
