//! Shared types module - data structures and constants used by every crate
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions serve the simulation core, the input sampler, and any host loop.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, bottom to top)
//! - **Spawn position**: (5, 19), the top visible row
//!
//! Row 0 is the floor. Pieces may extend above row 19 while falling in.
//!
//! # Timing Constants
//!
//! All durations are integer milliseconds (1 time-unit = 1000ms):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Suggested host tick (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 1000 | Gravity interval |
//! | `REPEAT_DELAY_MS` | 200 | Hold time before auto-repeat starts |
//! | `HORIZONTAL_REPEAT_MS` | 100 | Left/right repeat interval |
//! | `SOFT_DROP_REPEAT_MS` | 50 | Soft drop repeat interval |
//! | `SCORE_DECAY_PERIOD_MS` | 1000 | Placement score decay period |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, RotationMode, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_id(1).unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.id(), 1);
//! assert_eq!(PieceKind::O.rotation_mode(), RotationMode::None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column
pub const SPAWN_X: i8 = 5;

/// Spawn anchor row (top visible row)
pub const SPAWN_Y: i8 = BOARD_HEIGHT as i8 - 1;

/// Suggested fixed timestep for hosts (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds (one row per second)
pub const FALL_INTERVAL_MS: u32 = 1000;

/// Delay before a held direction starts repeating
pub const REPEAT_DELAY_MS: u32 = 200;

/// Repeat interval for held left/right
pub const HORIZONTAL_REPEAT_MS: u32 = 100;

/// Repeat interval for held soft drop
pub const SOFT_DROP_REPEAT_MS: u32 = 50;

/// Placement score a piece starts with
pub const INITIAL_PLACEMENT_SCORE: u32 = 100;

/// Placement score lost per decay period
pub const PLACEMENT_DECAY_STEP: u32 = 10;

/// Placement score decay period
pub const SCORE_DECAY_PERIOD_MS: u32 = 1000;

/// Line clear scores indexed by rows cleared in one lock (index 0 unused)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 400, 1200];

/// Combo multiplier increments indexed by rows cleared in one lock
pub const COMBO_INCREMENTS: [f32; 5] = [0.0, 0.0, 0.2, 0.5, 1.0];

/// Combo multiplier at the start of a run
pub const COMBO_START: f32 = 1.0;

/// Combo multiplier ceiling
pub const COMBO_CAP: f32 = 2.5;


/// The seven piece kinds, numbered 1..=7
///
/// - **T** (1): free rotation
/// - **O** (2): 2x2 square, no rotation
/// - **L** (3): free rotation
/// - **S** (4): two rotation states
/// - **I** (5): straight bar, two rotation states
/// - **Z** (6): two rotation states
/// - **J** (7): free rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    S,
    I,
    Z,
    J,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::S,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::J,
    ];

    /// Numeric id (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::S => 4,
            PieceKind::I => 5,
            PieceKind::Z => 6,
            PieceKind::J => 7,
        }
    }

    /// Look up a kind by numeric id
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(9), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::Z),
            7 => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Rotation behavior of the standard catalog for this kind
    pub fn rotation_mode(&self) -> RotationMode {
        match self {
            PieceKind::O => RotationMode::None,
            PieceKind::S | PieceKind::I | PieceKind::Z => RotationMode::Limited,
            PieceKind::T | PieceKind::L | PieceKind::J => RotationMode::Free,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::J => "j",
        }
    }
}

/// How a piece kind rotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationMode {
    /// Never rotates
    None,
    /// Toggles between two states
    Limited,
    /// Cycles through four states
    Free,
}

impl RotationMode {
    /// Number of distinct rotation states
    pub fn states(&self) -> u8 {
        match self {
            RotationMode::None => 1,
            RotationMode::Limited => 2,
            RotationMode::Free => 4,
        }
    }
}

/// Debounced intents for one simulation tick
///
/// Held flags describe the state during this tick; `rotate` is an edge and
/// should be true only on the tick the rotate input was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
}

impl TickInput {
    /// No input held
    pub const IDLE: TickInput = TickInput {
        left: false,
        right: false,
        down: false,
        rotate: false,
    };

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::IDLE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::IDLE
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::IDLE
        }
    }

    pub fn rotate() -> Self {
        Self {
            rotate: true,
            ..Self::IDLE
        }
    }

    /// True if any direction is held
    pub fn any_held(&self) -> bool {
        self.left || self.right || self.down
    }
}

/// Notifications for audio, renderer, HUD and game-over collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new piece entered play; `preview` is the next kind
    Spawned {
        kind: PieceKind,
        x: i8,
        y: i8,
        preview: PieceKind,
    },
    /// Input-driven move succeeded
    Moved,
    /// Rotation succeeded
    Rotated,
    /// Active piece locked; `placement_score` was added to the score
    Landed { placement_score: u32 },
    /// Rows cleared by the lock that just happened
    LinesCleared { rows: u8, points: u32 },
    /// A piece locked above the visible board
    GameOver,
}

impl GameEvent {
    /// Short lowercase name, used for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Spawned { .. } => "spawned",
            GameEvent::Moved => "moved",
            GameEvent::Rotated => "rotated",
            GameEvent::Landed { .. } => "landed",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::GameOver => "game_over",
        }
    }
}
