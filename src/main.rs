//! Headless runner (default binary).
//!
//! Owns the loop and the timing source: every tick it feeds scripted key events
//! through the input sampler, advances the game by a fixed `dt`, and logs the
//! collaborator events the core reports. Nothing is rendered.

use anyhow::Result;

use blockfall::cli::{parse_run_args, RunConfig, USAGE};
use blockfall::core::{GameState, RulesConfig, StandardCatalog, TickResult};
use blockfall::input::KeySampler;
use blockfall::script::ScriptedPlayer;
use blockfall::types::GameEvent;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_run_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };
    run(&config)
}

fn log_events(tick: u32, result: &TickResult) {
    for event in &result.events {
        match event {
            GameEvent::Spawned {
                kind,
                x,
                y,
                preview,
            } => println!(
                "[Game] tick {}: spawned {} at ({}, {}), next {}",
                tick,
                kind.as_str(),
                x,
                y,
                preview.as_str()
            ),
            GameEvent::Landed { placement_score } => println!(
                "[Game] tick {}: landed (+{}), score {}",
                tick, placement_score, result.score
            ),
            GameEvent::LinesCleared { rows, points } => println!(
                "[Game] tick {}: cleared {} row(s) (+{})",
                tick, rows, points
            ),
            GameEvent::GameOver => println!("[Game] tick {}: game over", tick),
            // Move and rotate cues are too chatty for the log.
            GameEvent::Moved | GameEvent::Rotated => {}
        }
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let rules = RulesConfig::default().with_fall_interval_ms(config.fall_ms);
    let mut game = GameState::with_config(config.seed, rules, StandardCatalog);
    let mut sampler = KeySampler::with_release_events();
    let mut player = ScriptedPlayer::new();

    println!(
        "[Game] seed {}, dt {}ms, fall {}ms, up to {} ticks",
        config.seed, config.dt_ms, config.fall_ms, config.ticks
    );
    log_events(0, &game.start());

    let mut moves = 0u32;
    let mut rotations = 0u32;
    let mut ticks_run = 0u32;
    for tick in 1..=config.ticks {
        for key in player.keys_for(game.active()) {
            sampler.handle_key_event(key);
        }
        let input = sampler.sample(config.dt_ms);
        let result = game.tick(config.dt_ms, input);
        ticks_run = tick;

        moves += result.events.iter().filter(|e| **e == GameEvent::Moved).count() as u32;
        rotations += result.events.iter().filter(|e| **e == GameEvent::Rotated).count() as u32;
        log_events(tick, &result);

        if result.game_over {
            break;
        }
    }

    println!(
        "[Game] {} ticks, {} moves, {} rotations, score {}, combo x{:.1}{}",
        ticks_run,
        moves,
        rotations,
        game.score(),
        game.combo_multiplier(),
        if game.game_over() { ", game over" } else { "" }
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }
    Ok(())
}
