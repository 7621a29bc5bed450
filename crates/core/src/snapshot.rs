//! Read-only view of a game for renderers and HUDs
//!
//! Kinds are exported as numeric ids (1..=7, 0 = empty cell) so the snapshot
//! serializes to compact JSON.

use serde::Serialize;

use crate::board::PieceId;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub id: PieceId,
    pub kind: u8,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
    /// Absolute cells, including any above the visible board
    pub blocks: Vec<(i8, i8)>,
    pub placement_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Kind id per cell, row 0 (the floor) first
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub current: Option<u8>,
    pub preview: Option<u8>,
    pub score: u32,
    pub combo_multiplier: f32,
    pub game_over: bool,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }

    /// Number of occupied cells on the board
    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&id| id != 0)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            current: None,
            preview: None,
            score: 0,
            combo_multiplier: 1.0,
            game_over: false,
            seed: 0,
        }
    }
}
