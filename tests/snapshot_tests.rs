//! Snapshot tests - read view and JSON shape

use blockfall::core::{Block, GameSnapshot, GameState};
use blockfall::types::{PieceKind, TickInput, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_default_snapshot_is_empty() {
    let snap = GameSnapshot::default();
    assert_eq!(snap.filled_cells(), 0);
    assert!(!snap.playable());
    assert_eq!(snap.combo_multiplier, 1.0);
}

#[test]
fn test_snapshot_board_uses_kind_ids() {
    let mut game = GameState::new(1);
    game.board_mut()
        .place_block(
            0,
            0,
            Block {
                owner: 999,
                kind: PieceKind::J,
            },
        )
        .unwrap();
    game.start();

    let snap = game.snapshot();
    assert_eq!(snap.board[0][0], PieceKind::J.id());
    assert!(snap.playable());

    let active = snap.active.as_ref().unwrap();
    let visible = active
        .blocks
        .iter()
        .filter(|&&(_, y)| y < BOARD_HEIGHT as i8)
        .count();
    assert_eq!(snap.filled_cells(), 1 + visible);
}

#[test]
fn test_snapshot_tracks_movement() {
    let mut game = GameState::new(2);
    game.start();
    let before = game.snapshot().active.unwrap();

    game.tick(16, TickInput::left());
    let after = game.snapshot().active.unwrap();
    assert_eq!(after.x, before.x - 1);
    assert_eq!(after.id, before.id);
    for (a, b) in after.blocks.iter().zip(&before.blocks) {
        assert_eq!(a.0, b.0 - 1);
        assert_eq!(a.1, b.1);
    }
}

#[test]
fn test_snapshot_json_shape() {
    let mut game = GameState::new(9);
    game.start();
    let json = serde_json::to_value(game.snapshot()).unwrap();

    let board = json["board"].as_array().unwrap();
    assert_eq!(board.len(), BOARD_HEIGHT as usize);
    assert_eq!(board[0].as_array().unwrap().len(), BOARD_WIDTH as usize);

    assert_eq!(json["seed"], 9);
    assert_eq!(json["score"], 0);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["active"]["placement_score"], 100);
    assert_eq!(json["active"]["blocks"].as_array().unwrap().len(), 4);
    assert!(json["preview"].is_u64());
}
