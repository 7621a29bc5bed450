//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a block tagged with
//! the id of the piece that owns it. Ownership tags let a moving piece ignore its own
//! cells during validity checks and let re-registration find every cell a piece holds.
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (bottom to top).
//! Cells above row 19 are never stored; a falling piece may still extend up there.

use crate::error::BoardError;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Identifier of a piece instance, unique for the lifetime of a run
pub type PieceId = u32;

/// A single occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub owner: PieceId,
    pub kind: PieceKind,
}

/// A cell on the board (None = empty)
pub type Cell = Option<Block>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// `0 <= x < WIDTH` and `y >= 0`. There is no upper bound: a piece may sit
    /// partly above the visible board while it falls in.
    pub fn is_inside_grid(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0
    }

    /// Get cell at position (x, y)
    /// Returns None if the cell is not stored (out of range or above the ceiling)
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Owner of the block at (x, y).
    ///
    /// Cells above the ceiling report `None`; coordinates off the sides or below
    /// the floor are an error.
    pub fn cell_owner(&self, x: i8, y: i8) -> Result<Option<PieceId>, BoardError> {
        if !self.is_inside_grid(x, y) {
            return Err(BoardError::OutOfRange { x, y });
        }
        Ok(self.get(x, y).flatten().map(|block| block.owner))
    }

    /// Whether (x, y) holds a block. Cells above the ceiling are never occupied.
    pub fn is_cell_occupied(&self, x: i8, y: i8) -> Result<bool, BoardError> {
        Ok(self.cell_owner(x, y)?.is_some())
    }

    /// Write a block directly into a stored cell
    pub fn place_block(&mut self, x: i8, y: i8, block: Block) -> Result<(), BoardError> {
        let idx = Self::index(x, y).ok_or(BoardError::OutOfRange { x, y })?;
        self.cells[idx] = Some(block);
        Ok(())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Empty every cell in a row
    pub fn clear_row(&mut self, row: usize) -> Result<(), BoardError> {
        if row >= BOARD_HEIGHT as usize {
            return Err(BoardError::RowOutOfRange(row));
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..end] {
            *cell = None;
        }
        Ok(())
    }

    /// Move every block in `row` one row down. Empty cells are left alone, so a
    /// block already sitting below an empty cell is kept.
    pub fn shift_row_down(&mut self, row: usize) -> Result<(), BoardError> {
        if row == 0 || row >= BOARD_HEIGHT as usize {
            return Err(BoardError::RowOutOfRange(row));
        }
        let width = BOARD_WIDTH as usize;
        for x in 0..width {
            let src = row * width + x;
            if let Some(block) = self.cells[src].take() {
                self.cells[src - width] = Some(block);
            }
        }
        Ok(())
    }

    /// Shift every row from `row` up to the top down by one, bottom first.
    pub fn shift_rows_down_from(&mut self, row: usize) -> Result<(), BoardError> {
        if row == 0 {
            return Err(BoardError::RowOutOfRange(row));
        }
        for r in row..BOARD_HEIGHT as usize {
            self.shift_row_down(r)?;
        }
        Ok(())
    }

    /// Record a piece's blocks on the board.
    ///
    /// Every cell the piece currently owns is released first, then each block
    /// below the ceiling is written. Blocks above the ceiling are not recorded.
    /// Fails without touching the board if a block lies off the sides or below the floor.
    pub fn register_piece(
        &mut self,
        owner: PieceId,
        kind: PieceKind,
        blocks: &[(i8, i8)],
    ) -> Result<(), BoardError> {
        if let Some(&(x, y)) = blocks.iter().find(|&&(x, y)| !self.is_inside_grid(x, y)) {
            return Err(BoardError::OutOfRange { x, y });
        }

        self.release_piece(owner);

        for &(x, y) in blocks {
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = Some(Block { owner, kind });
            }
        }
        Ok(())
    }

    /// Clear every cell owned by `owner`
    pub fn release_piece(&mut self, owner: PieceId) {
        for cell in &mut self.cells {
            if matches!(cell, Some(block) if block.owner == owner) {
                *cell = None;
            }
        }
    }

    /// True if any block sits above the top visible row
    pub fn is_out_of_bounds(&self, blocks: &[(i8, i8)]) -> bool {
        blocks.iter().any(|&(_, y)| y > BOARD_HEIGHT as i8 - 1)
    }

    /// Number of cells owned by `owner`
    pub fn cells_owned_by(&self, owner: PieceId) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Some(block) if block.owner == owner))
            .count()
    }

    /// Write kind ids (0 = empty) into a row-major grid, row 0 first
    pub fn write_id_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * width + x].map_or(0, |block| block.kind.id());
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
