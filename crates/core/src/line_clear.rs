//! Line clear module - removes full rows and compacts the board
//!
//! Single pass from the floor upward. A cleared row is refilled by the rows above
//! it, so the same index is checked again before moving on. This handles
//! simultaneous and non-contiguous clears in one pass.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::BOARD_HEIGHT;

/// Rows removed by one pass, in the order they were cleared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClearReport {
    rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
}

impl LineClearReport {
    /// Number of rows cleared
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row index at the moment each row was cleared
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }
}

/// Clear every full row and shift the rows above down.
pub fn clear_full_rows(board: &mut Board) -> LineClearReport {
    let mut report = LineClearReport::default();
    let height = BOARD_HEIGHT as usize;

    let mut row = 0usize;
    while row < height {
        if !board.is_row_full(row) {
            row += 1;
            continue;
        }

        // Each clear removes a full row of blocks, so at most `height` clears happen.
        report.rows.push(row as u8);

        // `row` is a stored row and `row + 1` is never 0, so neither call can fail.
        let cleared = board.clear_row(row);
        let shifted = board.shift_rows_down_from(row + 1);
        debug_assert!(cleared.is_ok() && shifted.is_ok());
    }

    report
}
