//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The mapping is
//! the only place key literals live; the core never sees a key code.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit, KeyBindings};
