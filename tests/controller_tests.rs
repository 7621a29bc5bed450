//! Controller tests - auto-repeat timing, event priority and gravity through the game loop

use blockfall::core::{GameState, PieceShape, RulesConfig, ShapeCatalog, StandardCatalog};
use blockfall::types::{GameEvent, PieceKind, RotationMode, TickInput, BOARD_HEIGHT};

fn started(seed: u64) -> GameState {
    let mut game = GameState::new(seed);
    game.start();
    game
}

/// Tick indices at which `input` produced a move, over `ticks` ticks of `dt_ms`
fn move_ticks(game: &mut GameState, input: TickInput, dt_ms: u32, ticks: usize) -> Vec<usize> {
    (0..ticks)
        .filter_map(|i| game.tick(dt_ms, input).has(&GameEvent::Moved).then_some(i))
        .collect()
}

#[test]
fn test_held_left_repeat_timing() {
    // Half a second at 50ms per tick: ticks 0..=10 cover t = 0..=500ms.
    let mut game = started(7);
    let x = game.active().unwrap().x;

    let mut moved_at = Vec::new();
    for i in 0..=10 {
        let before = game.active().unwrap().x;
        game.tick(50, TickInput::left());
        if game.active().unwrap().x != before {
            moved_at.push(i);
        }
    }

    // Immediate move, 200ms delay, then one move per 100ms.
    assert_eq!(moved_at, vec![0, 6, 8, 10]);
    assert_eq!(game.active().unwrap().x, x - 4);
}

#[test]
fn test_held_right_matches_left() {
    // Stops short of the right wall: x goes 5 -> 8.
    let mut game = started(7);
    assert_eq!(move_ticks(&mut game, TickInput::right(), 50, 9), vec![0, 6, 8]);
}

#[test]
fn test_release_restarts_delay() {
    let mut game = started(3);
    move_ticks(&mut game, TickInput::left(), 50, 7);
    game.tick(50, TickInput::IDLE);

    assert_eq!(move_ticks(&mut game, TickInput::left(), 50, 4), vec![0]);
}

#[test]
fn test_releasing_down_restarts_horizontal_delay() {
    let mut game = started(7);
    move_ticks(&mut game, TickInput::left(), 50, 7);
    let both = TickInput {
        left: true,
        down: true,
        ..TickInput::IDLE
    };
    game.tick(50, both);

    // Left is still held, but it starts over: one press, then the full delay.
    assert_eq!(move_ticks(&mut game, TickInput::left(), 50, 6), vec![0]);
}

#[test]
fn test_releasing_left_restarts_soft_drop_delay() {
    let mut game = started(11);
    let down_left = TickInput {
        left: true,
        down: true,
        ..TickInput::IDLE
    };
    for _ in 0..5 {
        game.tick(50, down_left);
    }
    let y = game.active().unwrap().y;

    // Dropping left makes the held down a fresh press again.
    let result = game.tick(50, TickInput::down());
    assert!(result.has(&GameEvent::Moved));
    assert_eq!(game.active().unwrap().y, y - 1);
    game.tick(50, TickInput::down());
    assert_eq!(game.active().unwrap().y, y - 1);
}

#[test]
fn test_direction_change_is_a_new_press() {
    let mut game = started(3);
    let x = game.active().unwrap().x;
    assert!(game.tick(50, TickInput::left()).has(&GameEvent::Moved));
    assert!(game.tick(50, TickInput::right()).has(&GameEvent::Moved));
    assert_eq!(game.active().unwrap().x, x);
}

#[test]
fn test_soft_drop_repeat_timing() {
    let mut game = started(11);
    let mut dropped_at = Vec::new();
    for i in 0..10 {
        let before = game.active().unwrap().y;
        game.tick(50, TickInput::down());
        if game.active().unwrap().y != before {
            dropped_at.push(i);
        }
    }
    // 200ms delay, then every 50ms.
    assert_eq!(dropped_at, vec![0, 5, 6, 7, 8, 9]);
}

#[test]
fn test_only_first_soft_drop_has_move_cue() {
    let mut game = started(11);
    let cues = move_ticks(&mut game, TickInput::down(), 50, 8);
    assert_eq!(cues, vec![0]);
}

#[test]
fn test_gravity_without_input() {
    let rules = RulesConfig::default().with_fall_interval_ms(250);
    let mut game = GameState::with_config(5, rules, StandardCatalog);
    game.start();
    let y = game.active().unwrap().y;

    for _ in 0..4 {
        let result = game.tick(50, TickInput::IDLE);
        assert!(result.events.is_empty());
    }
    assert_eq!(game.active().unwrap().y, y);

    // Gravity is silent.
    let result = game.tick(50, TickInput::IDLE);
    assert!(result.events.is_empty());
    assert_eq!(game.active().unwrap().y, y - 1);
}

#[test]
fn test_one_movement_event_per_tick() {
    let mut game = started(13);
    let piece = game.active().unwrap();
    let everything = TickInput {
        left: true,
        right: true,
        down: true,
        rotate: true,
    };

    let result = game.tick(16, everything);
    let after = game.active().unwrap();
    assert_eq!(result.events.as_slice(), &[GameEvent::Moved]);
    assert_eq!(after.x, piece.x + 1, "right wins over left");
    assert_eq!((after.y, after.rotation), (piece.y, piece.rotation));
}

#[test]
fn test_wall_stops_horizontal_moves() {
    let mut game = started(17);
    for _ in 0..200 {
        game.tick(50, TickInput::left());
        if game.active().is_none() {
            break;
        }
    }
    let cells = game.active_cells().unwrap();
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap();
    assert_eq!(min_x, 0);
}

/// Every spawn is `kind`, rotating per `mode`
struct OnlyKind(PieceKind, RotationMode);

impl ShapeCatalog for OnlyKind {
    fn shape(&self, _kind: PieceKind, rotation: u8) -> PieceShape {
        StandardCatalog.shape(self.0, rotation)
    }

    fn rotation_mode(&self, _kind: PieceKind) -> RotationMode {
        self.1
    }
}

fn started_with(catalog: OnlyKind, rules: RulesConfig) -> GameState<OnlyKind> {
    let mut game = GameState::with_config(21, rules, catalog);
    game.start();
    game
}

#[test]
fn test_rotate_emits_event_and_registers_cells() {
    let mut game = started_with(
        OnlyKind(PieceKind::T, RotationMode::Free),
        RulesConfig::default(),
    );
    let id = game.active().unwrap().id;

    let result = game.tick(16, TickInput::rotate());
    assert_eq!(result.events.as_slice(), &[GameEvent::Rotated]);
    assert_eq!(game.active().unwrap().rotation, 1);

    let cells = game.active_cells().unwrap();
    assert_eq!(cells.as_slice(), &[(5, 18), (5, 19), (5, 20), (4, 19)]);
    let visible: Vec<_> = cells
        .iter()
        .filter(|&&(_, y)| y < BOARD_HEIGHT as i8)
        .collect();
    assert_eq!(game.board().cells_owned_by(id), visible.len());
    for &&(x, y) in &visible {
        assert_eq!(game.board().cell_owner(x, y), Ok(Some(id)));
    }
    assert_eq!(game.board().cell_owner(6, 19), Ok(None));
}

#[test]
fn test_wall_blocked_rotate_is_silent() {
    let mut game = started_with(
        OnlyKind(PieceKind::I, RotationMode::Limited),
        RulesConfig::default(),
    );
    while game.active().unwrap().x > 0 {
        assert!(game.tick(16, TickInput::left()).has(&GameEvent::Moved));
        game.tick(16, TickInput::IDLE);
    }

    // Lying flat would put blocks at x = -2 and x = -1.
    let board = game.board().clone();
    let result = game.tick(16, TickInput::rotate());
    assert!(result.events.is_empty());
    assert_eq!(game.active().unwrap().rotation, 0);
    assert_eq!(game.board(), &board);
}

#[test]
fn test_rotate_without_rotation_still_uses_the_tick() {
    let rules = RulesConfig::default().with_fall_interval_ms(100);
    let mut game = started_with(OnlyKind(PieceKind::O, RotationMode::None), rules);
    let y = game.active().unwrap().y;

    game.tick(50, TickInput::IDLE);
    let result = game.tick(50, TickInput::rotate());
    assert!(result.events.is_empty());
    assert_eq!(game.active().unwrap().y, y, "gravity waits behind the rotate");

    game.tick(16, TickInput::IDLE);
    assert_eq!(game.active().unwrap().y, y - 1);
}
