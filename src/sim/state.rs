//! Game state and core simulation types
//!
//! The session owns everything that changes tick to tick: the player, the
//! fixed ring of platform slots, score, phase and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::Aabb;
use super::scenery::Sun;
use super::terrain::seed_platforms;
use crate::consts::{MUSIC_TRACK_COUNT, PLATFORM_COUNT};
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player alive, world scrolling
    Running,
    /// Player fell out of the world; waiting for restart
    GameOver,
}

/// Things that happened during a tick, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh session; host should start this in-game music track
    SessionStarted { music_track: u8 },
    /// Player left the ground
    Jumped,
    /// Player touched down after being airborne
    Landed,
    /// A platform scrolled off and was regenerated ahead
    PlatformRecycled { slot: usize, score: u64 },
    /// Player fell below the fall limit
    GameOver { score: u64, ticks: u64 },
    /// Restart after game over; new in-game music track
    Restarted { music_track: u8 },
}

/// A ground segment. Size is shared by every platform; only position moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: tuning.platform_width,
            height: tuning.platform_height,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(self.width, self.height))
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the drawn sprite (y grows downward)
    pub pos: Vec2,
    pub vel_y: f32,
    pub airborne: bool,
}

impl Player {
    /// Player at the spawn point, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.player_start_y),
            vel_y: 0.0,
            airborne: false,
        }
    }

    /// Collision box at a given top `y`
    ///
    /// Narrower than the drawn sprite: from 0.5x to 1.5x sprite size
    /// horizontally, full 2x sprite size vertically.
    pub fn hitbox_at(&self, y: f32, sprite_size: f32) -> Aabb {
        Aabb::new(
            Vec2::new(self.pos.x + sprite_size * 0.5, y),
            Vec2::new(self.pos.x + sprite_size * 1.5, y + sprite_size * 2.0),
        )
    }

    pub fn hitbox(&self, sprite_size: f32) -> Aabb {
        self.hitbox_at(self.pos.y, sprite_size)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Terrain and music draws
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Platform slots, replaced in place as they scroll off
    pub platforms: [Platform; PLATFORM_COUNT],
    pub player: Player,
    pub score: u64,
    pub phase: GamePhase,
    /// Running ticks since the last (re)start
    pub time_ticks: u64,
    /// Ticks since the session was created, in any phase
    pub total_ticks: u64,
    /// In-game music track (1-based)
    pub music_track: u8,
    /// Decorative background sprite
    pub sun: Sun,
    /// Events from the most recent tick (or from creation, before the first tick)
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.normalized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = seed_platforms(&mut rng, &tuning);
        let music_track = pick_music_track(&mut rng);

        let state = Self {
            seed,
            rng,
            player: Player::spawn(&tuning),
            tuning,
            platforms,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            total_ticks: 0,
            music_track,
            sun: Sun::default(),
            events: vec![GameEvent::SessionStarted { music_track }],
        };

        log::info!("Session started (seed {}, music track {})", seed, music_track);
        state
    }

    /// Reset player, score and terrain for a new run
    ///
    /// Terrain is rebuilt with the same seeding rule as a new session, using
    /// fresh draws from the session RNG.
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.platforms = seed_platforms(&mut self.rng, &self.tuning);
        self.music_track = pick_music_track(&mut self.rng);
        self.push_event(GameEvent::Restarted {
            music_track: self.music_track,
        });
        log::info!("Restarted (music track {})", self.music_track);
    }

    /// Slot index of the platform furthest to the right
    ///
    /// Ties keep the lowest slot.
    pub fn rightmost_slot(&self) -> usize {
        let mut best = 0;
        for (i, p) in self.platforms.iter().enumerate() {
            if p.pos.x > self.platforms[best].pos.x {
                best = i;
            }
        }
        best
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events from the most recent tick, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn pick_music_track<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=MUSIC_TRACK_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(1234);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(100.0, 204.0));
        assert!(!state.player.airborne);
        assert_eq!(state.platforms[0].pos, Vec2::new(0.0, 300.0));
        assert!((1..=MUSIC_TRACK_COUNT).contains(&state.music_track));
        assert_eq!(
            state.events(),
            &[GameEvent::SessionStarted {
                music_track: state.music_track
            }]
        );
    }

    #[test]
    fn test_player_hitbox_insets() {
        let player = Player::spawn(&Tuning::default());
        let hb = player.hitbox(32.0);
        assert_eq!(hb.min, Vec2::new(116.0, 204.0));
        assert_eq!(hb.max, Vec2::new(148.0, 268.0));
    }

    #[test]
    fn test_rightmost_slot() {
        let mut state = GameState::new(5);
        let t = state.tuning.clone();
        state.platforms = [
            Platform::new(900.0, 300.0, &t),
            Platform::new(-20.0, 300.0, &t),
            Platform::new(400.0, 300.0, &t),
        ];
        assert_eq!(state.rightmost_slot(), 0);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(9);
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_platform_off_screen() {
        let t = Tuning::default();
        assert!(!Platform::new(-500.0, 300.0, &t).is_off_screen());
        assert!(Platform::new(-500.5, 300.0, &t).is_off_screen());
    }
}
