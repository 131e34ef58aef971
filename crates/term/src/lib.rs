//! Terminal front end for blockdrop.
//!
//! Renders published snapshots into a framebuffer and flushes only the
//! changed glyphs to the terminal. No widget toolkit; cells are drawn two
//! columns wide so blocks look square.

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use bell::BellAudio;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
