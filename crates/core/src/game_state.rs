//! Game state module - owns the complete simulation
//!
//! This module ties together all core components: board, shape catalog, active
//! piece controller, line clears, scoring, and the piece queue. The host owns the
//! loop and calls [`GameState::tick`] once per frame with the elapsed time and
//! that frame's intents.
//!
//! Lock sequence, in order:
//! 1. clear full rows and score them (`LinesCleared`)
//! 2. check whether the piece locked above the visible board (`GameOver`)
//! 3. award the piece's placement score (`Landed`)
//! 4. spawn the next piece unless the game is over (`Spawned`)

use arrayvec::ArrayVec;

use crate::board::{Board, PieceId};
use crate::config::RulesConfig;
use crate::controller::{is_valid_position, ActivePiece, Controller};
use crate::line_clear::clear_full_rows;
use crate::pieces::{PieceShape, ShapeCatalog, StandardCatalog};
use crate::rng::PieceQueue;
use crate::scoring::ScoreState;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameEvent, PieceKind, TickInput};

/// Most events a single tick can produce
pub const MAX_TICK_EVENTS: usize = 8;

/// What happened during one call into the game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Collaborator notifications, in the order they happened
    pub events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
    /// Score after the tick
    pub score: u32,
    pub game_over: bool,
}

impl TickResult {
    pub fn has(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    /// True if the active piece locked this tick
    pub fn landed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Landed { .. }))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<C: ShapeCatalog = StandardCatalog> {
    board: Board,
    catalog: C,
    config: RulesConfig,
    queue: PieceQueue,
    score: ScoreState,
    active: Option<ActivePiece>,
    controller: Controller,
    /// Id handed to the next spawned piece; ids are never reused within a run
    next_piece_id: PieceId,
    started: bool,
    game_over: bool,
}

impl GameState<StandardCatalog> {
    /// Create a new game with default rules and the standard pieces
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, RulesConfig::default(), StandardCatalog)
    }
}

impl<C: ShapeCatalog> GameState<C> {
    /// Create a new game with explicit rules and shape catalog
    pub fn with_config(seed: u64, config: RulesConfig, catalog: C) -> Self {
        Self {
            board: Board::new(),
            catalog,
            config,
            queue: PieceQueue::new(seed),
            score: ScoreState::new(config.scores),
            active: None,
            controller: Controller::new(&config),
            next_piece_id: 1,
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> TickResult {
        let mut events = ArrayVec::new();
        if !self.started {
            self.started = true;
            self.spawn_piece(&mut events);
        }
        self.result(events)
    }

    /// Full reset: empty board, score 0, combo back to its start value, queue
    /// replayed from the seed. Starts the new run immediately.
    pub fn reset(&mut self) -> TickResult {
        self.board.clear();
        self.score.reset();
        self.queue.reset();
        self.active = None;
        self.controller.reset();
        self.next_piece_id = 1;
        self.started = false;
        self.game_over = false;
        self.start()
    }

    /// Advance the simulation by `elapsed_ms` with this tick's intents.
    ///
    /// Does nothing before [`start`](Self::start) or after game over.
    pub fn tick(&mut self, elapsed_ms: u32, input: TickInput) -> TickResult {
        let mut events = ArrayVec::new();
        if !self.started || self.game_over {
            return self.result(events);
        }
        let Some(mut piece) = self.active else {
            return self.result(events);
        };

        let outcome = self.controller.step(
            &mut piece,
            &mut self.board,
            &self.catalog,
            input,
            elapsed_ms,
        );

        if outcome.moved {
            events.push(GameEvent::Moved);
        }
        if outcome.rotated {
            events.push(GameEvent::Rotated);
        }

        if outcome.lock {
            self.lock_piece(piece, &mut events);
        } else {
            piece.age(
                elapsed_ms,
                self.config.placement_decay_step,
                self.config.placement_decay_period_ms,
            );
            self.active = Some(piece);
        }

        self.result(events)
    }

    fn result(&self, events: ArrayVec<GameEvent, MAX_TICK_EVENTS>) -> TickResult {
        TickResult {
            events,
            score: self.score.score(),
            game_over: self.game_over,
        }
    }

    /// Draw the next kind and put it at the spawn anchor
    fn spawn_piece(&mut self, events: &mut ArrayVec<GameEvent, MAX_TICK_EVENTS>) {
        let kind = self.queue.draw();
        let preview = self.queue.peek().unwrap_or(kind);

        let id = self.next_piece_id;
        self.next_piece_id = self.next_piece_id.wrapping_add(1);

        let piece = ActivePiece::new(
            id,
            kind,
            self.config.spawn,
            self.config.initial_placement_score,
        );

        // A blocked spawn stays off the board; its first failed fall locks it.
        if let Some(cells) = piece.cells(&self.catalog) {
            let valid = is_valid_position(&self.board, id, &cells);
            let registered = valid && self.board.register_piece(id, kind, &cells).is_ok();
            debug_assert_eq!(registered, valid);
        }

        self.controller.reset();
        self.active = Some(piece);

        let (x, y) = self.config.spawn;
        events.push(GameEvent::Spawned {
            kind,
            x,
            y,
            preview,
        });
    }

    /// Freeze `piece` where it is and run the lock sequence
    fn lock_piece(
        &mut self,
        piece: ActivePiece,
        events: &mut ArrayVec<GameEvent, MAX_TICK_EVENTS>,
    ) {
        self.active = None;

        let report = clear_full_rows(&mut self.board);
        self.score.record_rows(report.count());
        if let Some(points) = self.score.settle() {
            events.push(GameEvent::LinesCleared {
                rows: report.count() as u8,
                points,
            });
        }

        // Cells past the coordinate range count as above the ceiling.
        let out_of_bounds = piece
            .cells(&self.catalog)
            .map_or(true, |cells| self.board.is_out_of_bounds(&cells));
        if out_of_bounds && !self.game_over {
            self.game_over = true;
            events.push(GameEvent::GameOver);
        }

        self.score.add_placement(piece.placement_score);
        events.push(GameEvent::Landed {
            placement_score: piece.placement_score,
        });

        if !self.game_over {
            self.spawn_piece(events);
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn combo_multiplier(&self) -> f32 {
        self.score.combo_multiplier()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> Option<PieceShape> {
        self.active.and_then(|piece| piece.cells(&self.catalog))
    }

    /// Kind of the active piece (most recent draw)
    pub fn current_kind(&self) -> Option<PieceKind> {
        self.queue.current()
    }

    /// Preview kind shown for the next spawn
    pub fn preview_kind(&self) -> Option<PieceKind> {
        self.queue.peek()
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for hosts and tests that prepare positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active.map(|piece| ActiveSnapshot {
            id: piece.id,
            kind: piece.kind.id(),
            x: piece.x,
            y: piece.y,
            rotation: piece.rotation,
            blocks: piece
                .cells(&self.catalog)
                .map(|cells| cells.to_vec())
                .unwrap_or_default(),
            placement_score: piece.placement_score,
        });
        out.current = self.queue.current().map(|kind| kind.id());
        out.preview = self.queue.peek().map(|kind| kind.id());
        out.score = self.score.score();
        out.combo_multiplier = self.score.combo_multiplier();
        out.game_over = self.game_over;
        out.seed = self.queue.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<StandardCatalog> {
    fn default() -> Self {
        Self::new(1)
    }
}
