//! Endless Runner headless driver
//!
//! Runs the simulation with the autopilot at the nominal tick rate without a
//! window, restarting after every fall, and keeps a local leaderboard.
//!
//! Usage: `endless-runner [settings.json] [highscores.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use endless_runner::audio::{AudioManager, LogBackend};
use endless_runner::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use endless_runner::{HighScores, Settings};

const DEFAULT_SCORES_PATH: &str = "highscores.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Endless Runner (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let scores_path = args.next().unwrap_or_else(|| DEFAULT_SCORES_PATH.to_string());

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut audio = AudioManager::from_settings(LogBackend, &settings);
    let mut high_scores = HighScores::load_from(&scores_path);

    // Session start cues; the first tick discards them
    audio.handle_all(state.events());

    let mut input = TickInput {
        autopilot: settings.autopilot,
        ..Default::default()
    };
    let mut runs = 0u32;

    for _ in 0..settings.max_ticks {
        let out = tick(&mut state, &input);
        input.restart = false;

        for event in state.drain_events() {
            audio.handle(&event);
            if let GameEvent::GameOver { score, ticks } = event {
                runs += 1;
                if let Some(rank) = high_scores.add_score(score, ticks) {
                    log::info!("New high score #{}: {}", rank, score);
                }
            }
        }

        // Restart straight away
        if out.phase == GamePhase::GameOver {
            input.restart = true;
        }
    }

    log::info!(
        "Finished {} ticks: {} completed runs, current score {}, best {}",
        settings.max_ticks,
        runs,
        state.score,
        high_scores.top_score().unwrap_or(0)
    );

    high_scores
        .save_to(&scores_path)
        .with_context(|| format!("saving high scores to {}", scores_path))?;
    Ok(())
}

/// Seed from wall-clock time (runs need not be reproducible)
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
