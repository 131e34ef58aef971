//! Controller module - the public gameplay contract
//!
//! `GameController` owns the `GameState` and the injected audio service. Every
//! call mutates the state, routes the resulting events to audio, and publishes
//! a fresh `GameSnapshot`. Renderers only ever see published snapshots, never
//! the state mid-mutation.
//!
//! Events are also kept for the caller in a ring of `MAX_BUFFERED_EVENTS`.
//! A caller that never drains loses the oldest ones, audio never does.

use std::collections::vec_deque::{self, VecDeque};

use crate::audio::{clamp_volume, dispatch, AudioService, NullAudio};
use crate::game_state::GameState;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameEvent};

/// Events kept for `drain_events` before the oldest are dropped.
pub const MAX_BUFFERED_EVENTS: usize = 64;

pub struct GameController<A: AudioService = NullAudio> {
    state: GameState,
    audio: A,
    snapshot: GameSnapshot,
    events: VecDeque<GameEvent>,
    volume: f32,
}

impl GameController<NullAudio> {
    /// Silent controller
    pub fn silent(state: GameState) -> Self {
        Self::new(state, NullAudio)
    }
}

impl<A: AudioService> GameController<A> {
    pub fn new(state: GameState, audio: A) -> Self {
        let snapshot = state.snapshot();
        Self {
            state,
            audio,
            snapshot,
            events: VecDeque::with_capacity(MAX_BUFFERED_EVENTS),
            volume: 1.0,
        }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        self.audio.set_volume(self.volume);
    }

    /// Drain events produced since the last drain (best score, logging, ...)
    pub fn drain_events(&mut self) -> vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    fn run(&mut self, op: impl FnOnce(&mut GameState) -> bool) -> &GameSnapshot {
        let changed = op(&mut self.state);
        for event in self.state.take_events() {
            log::debug!("event {:?}", event);
            dispatch(&event, &mut self.audio);
            if self.events.len() == MAX_BUFFERED_EVENTS {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
        if changed {
            self.snapshot = self.state.snapshot();
        }
        &self.snapshot
    }

    pub fn start_game(&mut self) -> &GameSnapshot {
        self.run(GameState::start)
    }

    pub fn pause_game(&mut self) -> &GameSnapshot {
        self.run(GameState::pause)
    }

    pub fn resume_game(&mut self) -> &GameSnapshot {
        self.run(GameState::resume)
    }

    pub fn toggle_pause(&mut self) -> &GameSnapshot {
        self.run(GameState::toggle_pause)
    }

    /// Fresh episode, straight into PLAYING
    pub fn reset_game(&mut self) -> &GameSnapshot {
        self.run(GameState::restart)
    }

    /// `dx` is -1 or 1
    pub fn move_piece(&mut self, dx: i8) -> &GameSnapshot {
        self.run(|s| s.move_piece(dx.signum()))
    }

    pub fn rotate_piece(&mut self) -> &GameSnapshot {
        self.run(|s| s.rotate(true))
    }

    pub fn rotate_piece_opposite(&mut self) -> &GameSnapshot {
        self.run(|s| s.rotate(false))
    }

    pub fn soft_drop(&mut self) -> &GameSnapshot {
        self.run(GameState::soft_drop)
    }

    pub fn hard_drop(&mut self) -> &GameSnapshot {
        self.run(GameState::hard_drop)
    }

    pub fn hold_piece(&mut self) -> &GameSnapshot {
        self.run(GameState::hold)
    }

    /// Advance the gravity timer by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> &GameSnapshot {
        self.run(|s| s.tick(elapsed_ms))
    }

    pub fn apply_action(&mut self, action: GameAction) -> &GameSnapshot {
        self.run(|s| s.apply_action(action))
    }
}
