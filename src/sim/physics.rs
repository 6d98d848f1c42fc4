//! Gravity and landing resolution
//!
//! One-step lookahead, not swept collision: the player's hit box is tested at
//! the pre-move X and the post-gravity provisional Y. Only landings from above
//! are resolved; platforms never block horizontally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Platform, Player};
use crate::settings::Tuning;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap on both axes; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Result of a physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Player is standing on a platform this tick
    pub landed: bool,
    /// Player was airborne and just landed (fire the landing cue)
    pub touched_down: bool,
}

/// Advance the player by one tick against the platform set
pub fn step(player: &mut Player, platforms: &[Platform], tuning: &Tuning) -> StepOutcome {
    player.vel_y = (player.vel_y + tuning.gravity).min(tuning.terminal_velocity);

    let next_y = player.pos.y + player.vel_y;
    let hitbox = player.hitbox_at(next_y, tuning.sprite_size);
    let size = tuning.player_size();

    let mut landed = false;
    for platform in platforms {
        if !hitbox.overlaps(&platform.bounds()) {
            continue;
        }
        // Landing needs a falling player whose current feet are no deeper than the tolerance
        let falling = player.vel_y > 0.0;
        if falling && player.pos.y + size <= platform.top() + tuning.landing_tolerance {
            player.pos.y = platform.top() - size;
            player.vel_y = 0.0;
            landed = true;
        }
    }

    let touched_down = player.airborne && landed;
    if touched_down {
        log::debug!("Landed at y={}", player.pos.y);
    }
    player.airborne = !landed;
    player.pos.y += player.vel_y;

    StepOutcome {
        landed,
        touched_down,
    }
}
