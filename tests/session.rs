use endless_runner::audio::{AudioBackend, AudioManager, MusicCue, SoundEffect};
use endless_runner::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use endless_runner::{Settings, Tuning};

fn autopilot() -> TickInput {
    TickInput {
        autopilot: true,
        ..Default::default()
    }
}

#[test]
fn test_autopilot_clears_gaps() {
    let mut state = GameState::new(2024);
    let input = autopilot();

    for _ in 0..3000 {
        let out = tick(&mut state, &input);
        assert_eq!(out.phase, GamePhase::Running, "autopilot fell at score {}", out.score);
    }
    // First platform leaves after ~167 ticks, then one every ~183
    assert!(state.score >= 10, "score {}", state.score);
}

#[test]
fn test_score_counts_recycle_events() {
    let mut state = GameState::new(77);
    let input = autopilot();
    let mut recycles = 0;

    for _ in 0..1200 {
        tick(&mut state, &input);
        recycles += state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlatformRecycled { .. }))
            .count() as u64;
    }
    assert_eq!(recycles, state.score);
}

#[test]
fn test_idle_player_eventually_game_over_then_restart() {
    let mut state = GameState::new(5);
    let idle = TickInput::default();

    let mut guard = 0;
    while tick(&mut state, &idle).phase == GamePhase::Running {
        guard += 1;
        assert!(guard < 20_000, "idle player never fell");
    }

    // Nothing moves in GameOver
    let frozen = state.render_state();
    tick(&mut state, &idle);
    let after = state.render_state();
    assert_eq!(frozen.platforms, after.platforms);
    assert_eq!(frozen.player, after.player);

    let out = tick(
        &mut state,
        &TickInput {
            restart: true,
            ..Default::default()
        },
    );
    assert_eq!(out.phase, GamePhase::Running);
    assert_eq!(out.score, 0);
    assert_eq!(state.player.pos.x, 100.0);
    assert_eq!(state.player.pos.y, 204.0);
}

#[test]
fn test_same_seed_same_run() {
    let mut a = GameState::new(31337);
    let mut b = GameState::new(31337);
    for i in 0..2000u32 {
        let input = TickInput {
            jump: i % 97 == 0,
            restart: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut a, &input), tick(&mut b, &input));
    }
    assert_eq!(a.render_state(), b.render_state());
}

#[test]
fn test_settings_tuning_drives_session() {
    let settings = Settings::from_json(r#"{ "tuning": { "scroll_speed": 5.0 } }"#)
        .expect("valid settings");
    let mut state = GameState::with_tuning(1, settings.tuning.clone());
    let x = state.platforms[1].pos.x;
    tick(&mut state, &TickInput::default());
    assert_eq!(state.platforms[1].pos.x, x - 5.0);
    assert_eq!(state.tuning.gravity, Tuning::default().gravity);
}

#[derive(Default)]
struct Recorder {
    effects: Vec<SoundEffect>,
    music: Vec<MusicCue>,
}

impl AudioBackend for Recorder {
    fn play_effect(&mut self, effect: SoundEffect, _volume: f32) {
        self.effects.push(effect);
    }

    fn play_music(&mut self, cue: MusicCue, _volume: f32) {
        self.music.push(cue);
    }
}

#[test]
fn test_audio_follows_session() {
    let mut state = GameState::new(12);
    let mut audio = AudioManager::new(Recorder::default());
    audio.handle_all(state.events());
    assert_eq!(audio.current_music(), Some(MusicCue::InGame(state.music_track)));

    for _ in 0..400 {
        tick(&mut state, &autopilot());
        audio.handle_all(state.events());
    }

    let rec = audio.backend();
    // Spawn landing, then at least one autopilot jump and its landing
    assert!(rec.effects.contains(&SoundEffect::Land));
    assert!(rec.effects.contains(&SoundEffect::Jump));
    assert_eq!(rec.effects.first(), Some(&SoundEffect::Land));
    assert_eq!(rec.music.len(), 1);
}

#[test]
fn test_extreme_tuning_from_settings_runs() {
    let settings = Settings::from_json(
        r#"{ "tuning": { "max_height_offset": -2147483648, "min_platform_y": 350.0, "max_platform_y": 150.0 } }"#,
    )
    .expect("valid settings");
    let mut state = GameState::with_tuning(1, settings.tuning);
    for _ in 0..2000 {
        tick(
            &mut state,
            &TickInput {
                autopilot: true,
                restart: true,
                ..Default::default()
            },
        );
        for p in &state.platforms[1..] {
            assert!(p.pos.y >= 150.0 && p.pos.y <= 350.0);
        }
    }
}
