//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Fixed platform slots, stable iteration order
//! - No rendering, audio or platform dependencies

pub mod physics;
pub mod render;
pub mod scenery;
pub mod state;
pub mod terrain;
pub mod tick;

pub use physics::{Aabb, StepOutcome, step};
pub use render::{RenderRect, RenderState};
pub use scenery::Sun;
pub use state::{GameEvent, GamePhase, GameState, Platform, Player};
pub use terrain::{generate_platform, seed_platforms};
pub use tick::{TickInput, TickOutput, tick};
