//! Game state module - the single-owner state machine
//!
//! Ties together board, pieces, RNG and scoring. Every operation validates
//! against collision before touching anything: a rejected operation returns
//! `false` and leaves the state exactly as it was. The only terminal condition
//! is `Phase::GameOver`, which `reset` clears.
//!
//! Rotation has no wall kicks. A rotation that would collide at the current
//! position is rejected.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{random_piece, Piece};
use crate::rng::{PieceSource, Randomizer};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::types::*;

/// Events buffered between two drains.
pub const MAX_PENDING_EVENTS: usize = 16;

pub type PendingEvents = ArrayVec<GameEvent, MAX_PENDING_EVENTS>;

/// How often the hold slot may be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldPolicy {
    /// Any number of holds per piece
    #[default]
    Unlimited,
    /// One hold until the next piece spawns
    OncePerPiece,
}

impl HoldPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unlimited" | "free" => Some(HoldPolicy::Unlimited),
            "once" | "once_per_piece" => Some(HoldPolicy::OncePerPiece),
            _ => None,
        }
    }
}

/// Rule knobs fixed for the lifetime of a game (kept across resets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub randomizer: Randomizer,
    pub hold_policy: HoldPolicy,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    position: Position,
    next: Piece,
    held: Option<Piece>,
    can_hold: bool,
    source: PieceSource,
    rules: Rules,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    pieces_placed: u32,
    hold_counts: [u32; 7],
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    drop_timer_ms: u32,
    events: PendingEvents,
}

impl GameState {
    /// Create a new game with the given RNG seed and default rules
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    /// Create a new game: empty board, two random pieces, level 1, READY
    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        let mut source = PieceSource::new(seed, rules.randomizer);
        let current = random_piece(1, &mut source);
        let next = random_piece(1, &mut source);

        Self {
            board: Board::new(),
            current: Some(current),
            position: current.spawn_position(),
            next,
            held: None,
            can_hold: true,
            source,
            rules,
            phase: Phase::Ready,
            score: 0,
            level: 1,
            lines: 0,
            pieces_placed: 0,
            hold_counts: [0; 7],
            episode_id: 0,
            drop_timer_ms: 0,
            events: PendingEvents::new(),
        }
    }

    /// Replace the board (puzzles, replays, tests). The active piece keeps its
    /// position; overlap with it is not checked.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the current and next pieces; the current one goes to its spawn position.
    pub fn with_pieces(mut self, current: Piece, next: Piece) -> Self {
        self.position = current.spawn_position();
        self.current = Some(current);
        self.next = next;
        self
    }

    /// Place the current piece at an explicit position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    /// How many times each kind was sent to the hold slot, indexed by `PieceKind::index`
    pub fn hold_counts(&self) -> [u32; 7] {
        self.hold_counts
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Take and clear the events queued since the last call
    pub fn take_events(&mut self) -> PendingEvents {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            log::warn!("event queue full, dropping {:?}", event);
        }
    }

    /// READY → PLAYING
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Playing;
        self.drop_timer_ms = 0;
        self.emit(GameEvent::Started);
        log::debug!("episode {} started", self.episode_id);
        true
    }

    /// PLAYING → PAUSED
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Paused;
        self.emit(GameEvent::Paused);
        true
    }

    /// PAUSED → PLAYING
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Playing;
        self.emit(GameEvent::Resumed);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => self.pause(),
            Phase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Reinitialize everything for a new episode; phase goes back to READY.
    ///
    /// The piece sequence continues from the current RNG state so consecutive
    /// episodes differ; rules are kept.
    pub fn reset(&mut self) -> bool {
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::with_rules(self.source.seed(), self.rules);
        self.episode_id = next_episode;
        self.emit(GameEvent::Reset);
        true
    }

    /// Reset and immediately start playing
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    fn active_piece(&self) -> Option<Piece> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.current
    }

    /// Move one column left (`-1`) or right (`1`); any other `dx` and any
    /// collision is rejected
    pub fn move_piece(&mut self, dx: i8) -> bool {
        if dx != -1 && dx != 1 {
            return false;
        }
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let target = self.position.shifted(dx, 0);
        if self.board.collides(&piece, target) {
            return false;
        }
        self.position = target;
        self.emit(GameEvent::Moved);
        true
    }

    /// Rotate in place (clockwise or counter-clockwise); no kick search
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };

        // O piece doesn't rotate
        if piece.kind == PieceKind::O {
            return false;
        }

        let rotated = if clockwise {
            piece.rotated_cw()
        } else {
            piece.rotated_ccw()
        };
        if self.board.collides(&rotated, self.position) {
            return false;
        }
        self.current = Some(rotated);
        self.emit(GameEvent::Rotated);
        true
    }

    /// One gravity step: fall one row, or lock if the row below is blocked.
    pub fn gravity_tick(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let below = self.position.shifted(0, 1);
        if self.board.collides(&piece, below) {
            self.lock_piece();
        } else {
            self.position = below;
        }
        true
    }

    /// Player-requested gravity step. `SoftDropped` is only reported when the
    /// piece actually fell; a blocked step locks like gravity does.
    pub fn soft_drop(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let below = self.position.shifted(0, 1);
        if self.board.collides(&piece, below) {
            self.lock_piece();
        } else {
            self.position = below;
            self.emit(GameEvent::SoftDropped);
        }
        true
    }

    /// Drop straight to the resting row and lock
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let landed = self.board.drop_position(&piece, self.position);
        let rows = (landed.y - self.position.y) as u8;
        self.position = landed;
        self.emit(GameEvent::HardDropped { rows });
        self.lock_piece();
        true
    }

    /// Swap the current piece with the hold slot.
    ///
    /// An empty slot takes the current piece and the next piece comes in (a new
    /// next is drawn). Otherwise current and held trade places. Rejected if the
    /// incoming piece does not fit at its spawn position.
    pub fn hold(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        if self.rules.hold_policy == HoldPolicy::OncePerPiece && !self.can_hold {
            return false;
        }

        let incoming = self.held.unwrap_or(self.next);
        let spawn = incoming.spawn_position();
        if self.board.collides(&incoming, spawn) {
            return false;
        }

        if self.held.is_none() {
            self.next = random_piece(self.level, &mut self.source);
        }
        let outgoing = piece.respawned();
        self.held = Some(outgoing);
        self.current = Some(incoming);
        self.position = spawn;
        self.drop_timer_ms = 0;
        self.hold_counts[outgoing.kind.index()] += 1;
        self.can_hold = self.rules.hold_policy == HoldPolicy::Unlimited;
        self.emit(GameEvent::Held {
            kind: outgoing.kind,
        });
        true
    }

    /// Merge the current piece, clear rows, score, then spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let above_top = self.board.merge_piece(&piece, self.position);
        self.pieces_placed += 1;
        self.emit(GameEvent::PieceLocked { kind: piece.kind });

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            let points = line_clear_points(cleared);
            self.score = self.score.saturating_add(points);
            self.lines += cleared as u32;
            self.emit(GameEvent::LinesCleared {
                count: cleared as u8,
                points,
            });

            let level = level_for_lines(self.lines);
            if level != self.level {
                self.level = level;
                log::info!("level {} reached at {} lines", level, self.lines);
                self.emit(GameEvent::LevelChanged { level });
            }
        }

        if above_top {
            self.end_game();
            return;
        }
        self.spawn_next();
    }

    /// Promote next to current and draw a new next
    fn spawn_next(&mut self) {
        let incoming = self.next;
        self.next = random_piece(self.level, &mut self.source);
        self.position = incoming.spawn_position();
        self.can_hold = true;
        self.drop_timer_ms = 0;

        if self.board.collides(&incoming, self.position) {
            self.end_game();
            return;
        }
        self.current = Some(incoming);
    }

    fn end_game(&mut self) {
        self.current = None;
        self.phase = Phase::GameOver;
        log::info!(
            "game over: score {} level {} lines {} pieces {}",
            self.score,
            self.level,
            self.lines,
            self.pieces_placed
        );
        self.emit(GameEvent::GameOver { score: self.score });
    }

    /// Where the current piece would land, if there is one
    pub fn ghost_position(&self) -> Option<Position> {
        let piece = self.current?;
        Some(self.board.drop_position(&piece, self.position))
    }

    /// Fixed-timestep driver: accumulate time and run a gravity step once the
    /// level's interval has elapsed. Does nothing unless PLAYING.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        let interval = self.drop_interval_ms();
        if self.drop_timer_ms < interval {
            return false;
        }
        // Keep the remainder so fixed ticks don't quantize the fall rate.
        self.drop_timer_ms -= interval;
        self.gravity_tick()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
