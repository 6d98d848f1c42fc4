//! Render query: everything a host needs to draw one frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scenery::Sun;
use super::state::{GamePhase, GameState};
use crate::consts::PLATFORM_COUNT;

/// Screen-space rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Snapshot for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Drawn player sprite bounds (not the hit box)
    pub player: RenderRect,
    /// Platforms in slot order
    pub platforms: [RenderRect; PLATFORM_COUNT],
    pub sun: Sun,
    pub score: u64,
    pub phase: GamePhase,
}

impl GameState {
    pub fn render_state(&self) -> RenderState {
        let player_size = self.tuning.player_size();
        RenderState {
            player: RenderRect {
                pos: self.player.pos,
                size: Vec2::splat(player_size),
            },
            platforms: self.platforms.map(|p| RenderRect {
                pos: p.pos,
                size: Vec2::new(p.width, p.height),
            }),
            sun: self.sun,
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_mirrors_session() {
        let state = GameState::new(31);
        let render = state.render_state();

        assert_eq!(render.player.pos, Vec2::new(100.0, 204.0));
        assert_eq!(render.player.size, Vec2::new(64.0, 64.0));
        assert_eq!(render.platforms[0].pos, Vec2::new(0.0, 300.0));
        assert_eq!(render.platforms[0].size, Vec2::new(500.0, 450.0));
        for (rect, platform) in render.platforms.iter().zip(state.platforms.iter()) {
            assert_eq!(rect.pos, platform.pos);
        }
        assert_eq!(render.phase, GamePhase::Running);
        assert_eq!(render.score, 0);
    }

    #[test]
    fn test_render_state_serializes() {
        let state = GameState::new(31);
        let json = serde_json::to_string(&state.render_state()).expect("serialize");
        assert!(json.contains("\"phase\":\"Running\""));
    }
}
