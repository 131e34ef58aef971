//! Terminal bell as an audio backend.
//!
//! A terminal has one sound, so only the events a player should notice ring
//! it. Music requests are logged and otherwise ignored.

use std::io::{self, Write};

use crate::core::audio::clamp_volume;
use crate::core::{AudioService, MusicId, SoundId};

pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
    volume: f32,
    rings: u32,
}

impl BellAudio<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            volume: 1.0,
            rings: 0,
        }
    }

    pub fn muted(mut self) -> Self {
        self.volume = 0.0;
        self
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    /// Number of bells written so far
    pub fn rings(&self) -> u32 {
        self.rings
    }

    fn ring(&mut self) {
        if self.is_muted() {
            return;
        }
        // A failed bell is not worth interrupting the game for.
        match self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            Ok(()) => self.rings += 1,
            Err(err) => log::warn!("terminal bell failed: {}", err),
        }
    }
}

impl<W: Write> AudioService for BellAudio<W> {
    fn play_sound(&mut self, id: SoundId) {
        log::debug!("sound {:?}", id);
        if matches!(
            id,
            SoundId::LineClear | SoundId::Tetris | SoundId::LevelUp | SoundId::GameOver
        ) {
            self.ring();
        }
    }

    fn play_music(&mut self, id: MusicId) {
        log::debug!("music {:?}", id);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_notable_sounds_ring() {
        let mut bell = BellAudio::new(Vec::new());
        bell.play_sound(SoundId::Move);
        bell.play_sound(SoundId::Lock);
        bell.play_sound(SoundId::LineClear);
        bell.play_sound(SoundId::GameOver);
        bell.play_music(MusicId::Theme);
        assert_eq!(bell.rings(), 2);
        assert_eq!(bell.out, b"\x07\x07".to_vec());
    }

    #[test]
    fn test_muted_bell_is_silent() {
        let mut bell = BellAudio::new(Vec::new()).muted();
        bell.play_sound(SoundId::Tetris);
        assert_eq!(bell.rings(), 0);
        assert!(bell.out.is_empty());

        bell.set_volume(0.5);
        bell.play_sound(SoundId::Tetris);
        assert_eq!(bell.rings(), 1);
    }
}
