//! Audio cue routing
//!
//! The simulation only reports events. This module turns them into sound
//! and music cues and hands them to whatever backend the host plugs in.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Player landed after being airborne
    Land,
}

/// Music to have playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCue {
    /// In-game track (1-based)
    InGame(u8),
    /// Game over loop
    GameOver,
}

impl MusicCue {
    /// Conventional asset name for the cue
    pub fn file_name(&self) -> String {
        match self {
            MusicCue::InGame(track) => format!("music{:02}.ogg", track),
            MusicCue::GameOver => "gameover.ogg".to_string(),
        }
    }
}

/// Host-side playback. Fire-and-forget.
pub trait AudioBackend {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
    /// Switch to `cue`, stopping whatever music was playing
    fn play_music(&mut self, cue: MusicCue, volume: f32);
}

/// Backend that drops everything (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play_effect(&mut self, _effect: SoundEffect, _volume: f32) {}
    fn play_music(&mut self, _cue: MusicCue, _volume: f32) {}
}

/// Backend that just logs cues
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} @ {:.2}", effect, volume);
    }

    fn play_music(&mut self, cue: MusicCue, volume: f32) {
        log::info!("music {} @ {:.2}", cue.file_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    current_music: Option<MusicCue>,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            current_music: None,
        }
    }

    /// Build from persisted settings
    pub fn from_settings(backend: B, settings: &crate::Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Music that should currently be playing
    pub fn current_music(&self) -> Option<MusicCue> {
        self.current_music
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(self.sfx_volume);
        if vol <= 0.0 {
            return;
        }
        self.backend.play_effect(effect, vol);
    }

    fn switch_music(&mut self, cue: MusicCue) {
        self.current_music = Some(cue);
        let vol = self.effective_volume(self.music_volume);
        self.backend.play_music(cue, vol);
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Jumped => self.play(SoundEffect::Jump),
            GameEvent::Landed => self.play(SoundEffect::Land),
            GameEvent::SessionStarted { music_track } | GameEvent::Restarted { music_track } => {
                self.switch_music(MusicCue::InGame(music_track))
            }
            GameEvent::GameOver { .. } => self.switch_music(MusicCue::GameOver),
            GameEvent::PlatformRecycled { .. } => {}
        }
    }

    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}
