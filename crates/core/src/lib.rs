//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management and simulation
//! logic. It has no dependencies on UI, terminal, or file I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain function or method on a `Copy` value
//! - **Zero-allocation hot path**: fixed arrays and `arrayvec` only
//!
//! # Module Structure
//!
//! - [`shape`]: occupancy matrices, clockwise rotation, cropping
//! - [`pieces`]: tetromino values, level-banded palettes, spawning
//! - [`rng`]: seedable LCG with uniform and 7-bag randomizers
//! - [`board`]: 10x20 grid, collision, merging and line clearing
//! - [`scoring`]: points table, level formula, gravity intervals
//! - [`game_state`]: the READY/PLAYING/PAUSED/GAME_OVER state machine
//! - [`snapshot`]: read-only view published to renderers
//! - [`audio`]: injected audio-service interface and event routing
//! - [`controller`]: the public contract tying state, audio and snapshots
//!
//! # Game Rules
//!
//! - Independent uniform piece draws by default (7-bag optional)
//! - Rotation without wall kicks: a colliding rotation is rejected
//! - No lock delay: a piece that cannot fall on a gravity step locks at once
//! - Line clears score 10/25/40/50 for 1/2/3/4 rows; drops score nothing
//! - Level is `1 + lines / 10`; gravity speeds up with level down to 100ms
//! - Game over when a piece locks partly above the grid or the next piece
//!   cannot spawn
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{GameController, GameState};
//!
//! let mut game = GameController::silent(GameState::new(12345));
//! game.start_game();
//! game.move_piece(1);
//! game.rotate_piece();
//! let snap = game.hard_drop();
//!
//! assert_eq!(snap.pieces_placed, 1);
//! assert!(!snap.game_over());
//! ```

pub mod audio;
pub mod board;
pub mod controller;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use audio::{AudioService, MusicId, NullAudio, RecordingAudio, SoundId};
pub use board::{check_collision, clear_lines, merge_board, Board};
pub use controller::{GameController, MAX_BUFFERED_EVENTS};
pub use game_state::{GameState, HoldPolicy, Rules};
pub use pieces::{piece_color, random_piece, Piece};
pub use rng::{PieceSource, Randomizer, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
pub use shape::{crop_shape, rotate, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PiecePreview};
