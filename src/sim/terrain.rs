//! Procedural platform generation
//!
//! New platforms take a random vertical step from the previous one, then get
//! clamped twice: into the playable band, then to a bounded step size.

use rand::Rng;

use super::state::Platform;
use crate::consts::PLATFORM_COUNT;
use crate::settings::Tuning;

/// Generate a platform at `anchor_x`, stepping vertically from `anchor_y`
pub fn generate_platform<R: Rng + ?Sized>(
    rng: &mut R,
    anchor_x: f32,
    anchor_y: f32,
    tuning: &Tuning,
) -> Platform {
    // Widened so any i32 offset (including i32::MIN) is a valid range
    let offset = i64::from(tuning.max_height_offset.unsigned_abs());
    let variation = rng.random_range(-offset..=offset) as f32;
    let y = clamp_step(anchor_y + variation, anchor_y, tuning);
    Platform::new(anchor_x, y, tuning)
}

/// Clamp a candidate Y into the band, then to at most `max_step_diff` from `anchor_y`
///
/// The step clamp runs last, so it wins when the anchor itself sits outside the band.
pub fn clamp_step(candidate_y: f32, anchor_y: f32, tuning: &Tuning) -> f32 {
    let mut y = candidate_y;
    if y > tuning.max_platform_y {
        y = tuning.max_platform_y;
    }
    if y < tuning.min_platform_y {
        y = tuning.min_platform_y;
    }

    if y > anchor_y + tuning.max_step_diff {
        y = anchor_y + tuning.max_step_diff;
    } else if y < anchor_y - tuning.max_step_diff {
        y = anchor_y - tuning.max_step_diff;
    }
    y
}

/// X of the platform that follows `prev`
#[inline]
pub fn next_anchor_x(prev: &Platform, tuning: &Tuning) -> f32 {
    prev.right() + tuning.platform_gap_x
}

/// Initial platform layout: a fixed first platform at x=0, the rest chained off it
pub fn seed_platforms<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> [Platform; PLATFORM_COUNT] {
    let first = Platform::new(0.0, tuning.initial_platform_y, tuning);
    let mut platforms = [first; PLATFORM_COUNT];
    for i in 1..PLATFORM_COUNT {
        let prev = platforms[i - 1];
        platforms[i] = generate_platform(rng, next_anchor_x(&prev, tuning), prev.pos.y, tuning);
    }
    platforms
}
