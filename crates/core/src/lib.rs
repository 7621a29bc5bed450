//! Core simulation - pure, deterministic, and testable
//!
//! This crate contains the board, piece rules, line clears, scoring and the
//! piece queue. It has no dependencies on rendering, audio, or input devices:
//!
//! - **Deterministic**: the same seed and the same inputs replay the same game
//! - **Host-driven**: the embedding loop calls [`GameState::tick`] with elapsed
//!   milliseconds and the tick's intents
//! - **Quiet**: nothing is printed; every collaborator notification comes back
//!   as a [`GameEvent`](types::GameEvent) in the [`TickResult`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of owned cells, row compaction, piece registration
//! - [`pieces`]: shape catalog trait, the standard seven kinds, rotation states
//! - [`controller`]: active piece movement, rotation, gravity and auto-repeat
//! - [`repeat`]: delay/interval timing for held directions
//! - [`line_clear`]: full-row removal pass
//! - [`scoring`]: line scores and the combo multiplier
//! - [`rng`]: seeded current/next piece queue
//! - [`game_state`]: the aggregate and its lock sequence
//! - [`snapshot`]: serializable read view
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameEvent, TickInput};
//!
//! let mut game = GameState::new(12345);
//! let started = game.start();
//! assert!(matches!(started.events[0], GameEvent::Spawned { x: 5, y: 19, .. }));
//!
//! let result = game.tick(16, TickInput::left());
//! assert!(result.has(&GameEvent::Moved));
//! assert_eq!(result.score, 0);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod game_state;
pub mod line_clear;
pub mod pieces;
pub mod repeat;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Block, Board, Cell, PieceId};
pub use config::{RepeatTiming, RulesConfig, ScoreTable};
pub use controller::{is_valid_position, try_rotate, try_shift, ActivePiece, Controller};
pub use error::BoardError;
pub use game_state::{GameState, TickResult};
pub use line_clear::{clear_full_rows, LineClearReport};
pub use pieces::{PieceShape, ShapeCatalog, StandardCatalog};
pub use repeat::{AutoRepeat, RepeatFire};
pub use rng::PieceQueue;
pub use scoring::{calculate_line_score, next_multiplier, ScoreState};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
