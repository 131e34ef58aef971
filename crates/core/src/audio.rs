//! Audio module - injected sound/music capability
//!
//! The state machine never plays anything. The controller forwards each
//! `GameEvent` to [`dispatch`], which turns it into calls on whatever
//! [`AudioService`] the host injected (terminal bell, a real mixer, or
//! [`NullAudio`]).

use crate::types::GameEvent;

/// Short sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Move,
    Rotate,
    SoftDrop,
    HardDrop,
    Hold,
    Lock,
    LineClear,
    /// Four rows at once
    Tetris,
    LevelUp,
    Pause,
    GameOver,
}

/// Background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicId {
    Theme,
    /// Stop whatever is playing
    Silence,
}

/// Playback capability injected into the controller
pub trait AudioService {
    fn play_sound(&mut self, id: SoundId);
    fn play_music(&mut self, id: MusicId);
    /// Master volume, 0.0 (mute) to 1.0
    fn set_volume(&mut self, volume: f32);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play_sound(&mut self, _id: SoundId) {}
    fn play_music(&mut self, _id: MusicId) {}
    fn set_volume(&mut self, _volume: f32) {}
}

/// One call received by [`RecordingAudio`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Sound(SoundId),
    Music(MusicId),
    Volume(f32),
}

/// Keeps a log of calls; handy for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sounds(&self) -> impl Iterator<Item = SoundId> + '_ {
        self.calls.iter().filter_map(|c| match c {
            AudioCall::Sound(id) => Some(*id),
            _ => None,
        })
    }
}

impl AudioService for RecordingAudio {
    fn play_sound(&mut self, id: SoundId) {
        self.calls.push(AudioCall::Sound(id));
    }

    fn play_music(&mut self, id: MusicId) {
        self.calls.push(AudioCall::Music(id));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(AudioCall::Volume(clamp_volume(volume)));
    }
}

/// Clamp to 0.0..=1.0, mapping NaN to mute
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Route one game event to the audio service
pub fn dispatch<A: AudioService + ?Sized>(event: &GameEvent, audio: &mut A) {
    match *event {
        GameEvent::Started | GameEvent::Resumed => audio.play_music(MusicId::Theme),
        GameEvent::Paused => {
            audio.play_music(MusicId::Silence);
            audio.play_sound(SoundId::Pause);
        }
        GameEvent::Reset => audio.play_music(MusicId::Silence),
        GameEvent::Moved => audio.play_sound(SoundId::Move),
        GameEvent::Rotated => audio.play_sound(SoundId::Rotate),
        GameEvent::SoftDropped => audio.play_sound(SoundId::SoftDrop),
        GameEvent::HardDropped { .. } => audio.play_sound(SoundId::HardDrop),
        GameEvent::Held { .. } => audio.play_sound(SoundId::Hold),
        GameEvent::PieceLocked { .. } => audio.play_sound(SoundId::Lock),
        GameEvent::LinesCleared { count, .. } if count >= 4 => audio.play_sound(SoundId::Tetris),
        GameEvent::LinesCleared { .. } => audio.play_sound(SoundId::LineClear),
        GameEvent::LevelChanged { .. } => audio.play_sound(SoundId::LevelUp),
        GameEvent::GameOver { .. } => {
            audio.play_music(MusicId::Silence);
            audio.play_sound(SoundId::GameOver);
        }
    }
}
