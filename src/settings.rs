//! Game settings and tuning
//!
//! Persisted as JSON next to the binary (or wherever the host points).
//! Every field has a default, so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and terrain tuning
///
/// `Tuning::default()` matches the constants in [`crate::consts`] exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Sprite cell size; hit box and drawn size derive from it
    pub sprite_size: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_force: f32,
    pub terminal_velocity: f32,
    pub landing_tolerance: f32,
    pub fall_limit: f32,

    // === World ===
    pub scroll_speed: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_gap_x: f32,
    pub initial_platform_y: f32,

    // === Terrain generation ===
    pub max_height_offset: i32,
    pub max_step_diff: f32,
    pub min_platform_y: f32,
    pub max_platform_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sprite_size: SPRITE_SIZE,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,

            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            terminal_velocity: TERMINAL_VELOCITY,
            landing_tolerance: LANDING_TOLERANCE,
            fall_limit: FALL_LIMIT,

            scroll_speed: SCROLL_SPEED,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_gap_x: PLATFORM_GAP_X,
            initial_platform_y: INITIAL_PLATFORM_Y,

            max_height_offset: MAX_HEIGHT_OFFSET,
            max_step_diff: MAX_STEP_DIFF,
            min_platform_y: MIN_PLATFORM_Y,
            max_platform_y: MAX_PLATFORM_Y,
        }
    }
}

impl Tuning {
    /// Put hand-edited values back into a usable shape
    ///
    /// Swaps an inverted platform band and makes the step limit non-negative.
    pub fn normalized(mut self) -> Self {
        if self.min_platform_y > self.max_platform_y {
            log::warn!(
                "Platform band inverted ({} > {}), swapping",
                self.min_platform_y,
                self.max_platform_y
            );
            std::mem::swap(&mut self.min_platform_y, &mut self.max_platform_y);
        }
        self.max_step_diff = self.max_step_diff.abs();
        self
    }

    /// Drawn player size (the sprite is scaled 2x)
    pub fn player_size(&self) -> f32 {
        self.sprite_size * 2.0
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Let the built-in autopilot press jump
    pub autopilot: bool,
    /// Headless driver stops after this many ticks
    pub max_ticks: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    /// Simulation tuning
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            max_ticks: 60 * TICKS_PER_SECOND as u64,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.normalized();
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
