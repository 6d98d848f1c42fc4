//! Endless Runner - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, landing, terrain, game state)
//! - `settings`: Data-driven configuration and tuning
//! - `audio`: Sound/music cue routing to a host backend
//! - `highscores`: Local leaderboard

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Visible play area
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Source sprite cell size; the player is drawn at 2x
    pub const SPRITE_SIZE: f32 = 32.0;

    /// Platform geometry (identical for every platform)
    pub const PLATFORM_WIDTH: f32 = 500.0;
    pub const PLATFORM_HEIGHT: f32 = 450.0;
    /// Top edge of the first platform
    pub const INITIAL_PLATFORM_Y: f32 = 300.0;
    /// Horizontal gap between consecutive platforms
    pub const PLATFORM_GAP_X: f32 = 50.0;
    /// Number of platform slots kept alive
    pub const PLATFORM_COUNT: usize = 3;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_FORCE: f32 = -12.0;
    /// Maximum downward velocity
    pub const TERMINAL_VELOCITY: f32 = 12.0;
    /// World scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;

    /// Largest random vertical step drawn for a new platform
    pub const MAX_HEIGHT_OFFSET: i32 = 50;
    /// Largest vertical step allowed between neighbouring platforms
    pub const MAX_STEP_DIFF: f32 = 60.0;
    /// Highest allowed platform top
    pub const MIN_PLATFORM_Y: f32 = SCREEN_HEIGHT - 300.0;
    /// Lowest allowed platform top
    pub const MAX_PLATFORM_Y: f32 = SCREEN_HEIGHT - 100.0;

    /// Slack below a platform top within which a falling player still lands
    pub const LANDING_TOLERANCE: f32 = 5.0;

    /// Player spawn point (top-left of the drawn sprite)
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = INITIAL_PLATFORM_Y - SPRITE_SIZE * 3.0;

    /// Below this Y the player has fallen out of the world
    pub const FALL_LIMIT: f32 = SCREEN_HEIGHT + SPRITE_SIZE * 2.0;

    /// Number of in-game music tracks the host can choose from
    pub const MUSIC_TRACK_COUNT: u8 = 12;
}

/// Convert a tick count to elapsed seconds at the nominal rate
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 / consts::TICKS_PER_SECOND as f32
}
