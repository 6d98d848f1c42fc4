//! Fixed-step simulation tick
//!
//! One call advances the session by one frame. Order within a Running tick:
//! jump input, physics, scroll, platform recycling, fall check.

use serde::{Deserialize, Serialize};

use super::physics;
use super::state::{GameEvent, GamePhase, GameState};
use super::terrain::generate_platform;
use crate::ticks_to_secs;

/// Autopilot jumps when the supporting platform ends this close ahead of the hit box
pub const AUTOPILOT_LOOKAHEAD: f32 = 12.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump pressed this frame (only honoured while Running)
    pub jump: bool,
    /// Restart pressed this frame (only honoured in GameOver)
    pub restart: bool,
    /// Demo mode - the session jumps on its own
    pub autopilot: bool,
}

/// What the host gets back from every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutput {
    pub score: u64,
    pub phase: GamePhase,
}

/// Advance the game state by one tick
///
/// Events left over from the previous tick are discarded first, so
/// `state.events()` afterwards holds only this tick's events.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutput {
    state.clear_events();
    state.total_ticks += 1;
    state.sun.update(ticks_to_secs(state.total_ticks));

    match state.phase {
        GamePhase::Running => run(state, input),
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
        }
    }

    TickOutput {
        score: state.score,
        phase: state.phase,
    }
}

fn run(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let wants_jump = input.jump || (input.autopilot && autopilot_wants_jump(state));
    if wants_jump && !state.player.airborne {
        state.player.vel_y = state.tuning.jump_force;
        state.player.airborne = true;
        state.push_event(GameEvent::Jumped);
    }

    let outcome = physics::step(&mut state.player, &state.platforms, &state.tuning);
    if outcome.touched_down {
        state.push_event(GameEvent::Landed);
    }

    let scroll = state.tuning.scroll_speed;
    for platform in &mut state.platforms {
        platform.pos.x -= scroll;
    }

    recycle_platforms(state);

    if state.player.pos.y > state.tuning.fall_limit {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver {
            score: state.score,
            ticks: state.time_ticks,
        });
        log::info!(
            "Game over: score {} after {} ticks",
            state.score,
            state.time_ticks
        );
    }
}

/// Replace every platform that scrolled fully off-screen with a new one
/// past the current rightmost platform. One point per replacement.
fn recycle_platforms(state: &mut GameState) {
    for slot in 0..state.platforms.len() {
        if !state.platforms[slot].is_off_screen() {
            continue;
        }

        let anchor = state.platforms[state.rightmost_slot()];
        let anchor_x = anchor.pos.x + state.tuning.platform_gap_x + anchor.width;
        state.platforms[slot] =
            generate_platform(&mut state.rng, anchor_x, anchor.pos.y, &state.tuning);
        state.score += 1;

        log::debug!(
            "Recycled slot {} to x={} y={} (score {})",
            slot,
            state.platforms[slot].pos.x,
            state.platforms[slot].pos.y,
            state.score
        );
        state.push_event(GameEvent::PlatformRecycled {
            slot,
            score: state.score,
        });
    }
}

/// Grounded and about to run off the end of the supporting platform
fn autopilot_wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    if player.airborne {
        return false;
    }

    let hitbox = player.hitbox(state.tuning.sprite_size);
    let feet = hitbox.max.y;
    state
        .platforms
        .iter()
        .filter(|p| (p.top() - feet).abs() < 1.0)
        .filter(|p| p.pos.x < hitbox.max.x && p.right() > hitbox.min.x)
        .map(|p| p.right() - hitbox.max.x)
        .max_by(f32::total_cmp)
        .is_some_and(|room| room <= AUTOPILOT_LOOKAHEAD)
}
