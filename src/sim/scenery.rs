//! Decorative background sprites (no gameplay effect)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sun sprite sheet cell size
pub const SUN_SPRITE_SIZE: f32 = 200.0;
/// Draw scale for the sun
pub const SUN_SCALE: f32 = 0.5;
/// Bob amplitude per tick
const SUN_DRIFT: f32 = 0.1;

/// Slowly bobbing sun in the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub pos: Vec2,
    /// Drawn edge length
    pub size: f32,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, 10.0),
            size: SUN_SPRITE_SIZE * SUN_SCALE,
        }
    }
}

impl Sun {
    /// Drift vertically; `time_secs` is the elapsed session clock
    pub fn update(&mut self, time_secs: f32) {
        self.pos.y += SUN_DRIFT * time_secs.sin();
    }
}
