//! Error types for grid access.

use thiserror::Error;

/// Grid access failures.
///
/// Callers are expected to pre-check with [`Board::is_inside_grid`](crate::Board::is_inside_grid),
/// so hitting one of these means a caller skipped validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfRange { x: i8, y: i8 },
    #[error("row {0} is outside the board")]
    RowOutOfRange(usize),
}
