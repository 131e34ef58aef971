//! blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces of
//! the terminal shell that touch the outside world: environment configuration
//! and the best-score cache.

pub mod best_score;
pub mod config;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;

pub use best_score::BestScore;
pub use config::Config;
