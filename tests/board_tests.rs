//! Board tests - occupancy, row operations and piece registration

use blockfall::core::{Block, Board, BoardError};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn block(owner: u32) -> Block {
    Block {
        owner,
        kind: PieceKind::L,
    }
}

fn fill_row(board: &mut Board, y: i8, owner: u32) {
    for x in 0..BOARD_WIDTH as i8 {
        board.place_block(x, y, block(owner)).unwrap();
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.is_cell_occupied(x, y), Ok(false), "({}, {})", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    for row in 0..BOARD_HEIGHT as usize {
        assert!(!board.is_row_full(row));
    }
}

#[test]
fn test_occupancy_query_fails_fast_off_the_board() {
    let board = Board::new();

    assert_eq!(
        board.is_cell_occupied(-1, 0),
        Err(BoardError::OutOfRange { x: -1, y: 0 })
    );
    assert_eq!(
        board.is_cell_occupied(BOARD_WIDTH as i8, 0),
        Err(BoardError::OutOfRange { x: 10, y: 0 })
    );
    assert!(board.is_cell_occupied(0, -1).is_err());

    // Above the ceiling is inside the grid and simply empty.
    assert_eq!(board.is_cell_occupied(0, BOARD_HEIGHT as i8), Ok(false));
}

#[test]
fn test_row_full_needs_every_cell() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.place_block(x, 4, block(1)).unwrap();
    }
    assert!(!board.is_row_full(4));

    board.place_block(BOARD_WIDTH as i8 - 1, 4, block(2)).unwrap();
    assert!(board.is_row_full(4));
    assert!(!board.is_row_full(3));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_row_empties_only_that_row() {
    let mut board = Board::new();
    fill_row(&mut board, 0, 1);
    fill_row(&mut board, 1, 2);

    board.clear_row(0).unwrap();
    assert!(!board.is_row_full(0));
    assert_eq!(board.cells_owned_by(1), 0);
    assert!(board.is_row_full(1));

    assert_eq!(
        board.clear_row(BOARD_HEIGHT as usize),
        Err(BoardError::RowOutOfRange(BOARD_HEIGHT as usize))
    );
}

#[test]
fn test_shift_rows_down_from_compacts_everything_above() {
    let mut board = Board::new();
    board.place_block(2, 3, block(1)).unwrap();
    board.place_block(7, 5, block(2)).unwrap();
    board.place_block(0, 19, block(3)).unwrap();

    board.shift_rows_down_from(1).unwrap();

    assert_eq!(board.cell_owner(2, 2), Ok(Some(1)));
    assert_eq!(board.cell_owner(7, 4), Ok(Some(2)));
    assert_eq!(board.cell_owner(0, 18), Ok(Some(3)));
    assert_eq!(board.cell_owner(0, 19), Ok(None));
}

#[test]
fn test_shift_on_empty_board_is_noop() {
    let mut board = Board::new();
    board.shift_rows_down_from(1).unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_register_piece_moves_ownership() {
    let mut board = Board::new();
    board
        .register_piece(5, PieceKind::S, &[(4, 10), (5, 10), (5, 11), (6, 11)])
        .unwrap();
    assert_eq!(board.cells_owned_by(5), 4);

    board
        .register_piece(5, PieceKind::S, &[(4, 9), (5, 9), (5, 10), (6, 10)])
        .unwrap();
    assert_eq!(board.cells_owned_by(5), 4);
    assert_eq!(board.cell_owner(4, 10), Ok(None));
    assert_eq!(board.cell_owner(6, 11), Ok(None));
    assert_eq!(board.cell_owner(5, 10), Ok(Some(5)));
}

#[test]
fn test_register_at_same_position_is_stable() {
    let mut board = Board::new();
    let cells = [(0, 0), (1, 0), (2, 0), (1, 1)];
    board.register_piece(8, PieceKind::T, &cells).unwrap();
    let once = board.clone();

    board.register_piece(8, PieceKind::T, &cells).unwrap();
    assert_eq!(board, once);
}

#[test]
fn test_register_does_not_touch_other_pieces() {
    let mut board = Board::new();
    board.place_block(0, 0, block(1)).unwrap();
    board
        .register_piece(2, PieceKind::O, &[(4, 4), (5, 4), (4, 5), (5, 5)])
        .unwrap();
    board.release_piece(2);

    assert_eq!(board.cells_owned_by(2), 0);
    assert_eq!(board.cell_owner(0, 0), Ok(Some(1)));
}

#[test]
fn test_out_of_bounds_only_above_ceiling() {
    let board = Board::new();
    assert!(!board.is_out_of_bounds(&[(5, 0), (5, 19)]));
    assert!(board.is_out_of_bounds(&[(5, 19), (5, 20)]));
}
