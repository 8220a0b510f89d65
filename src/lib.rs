//! Terminal match-3 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_match3::{core,input,term,types}` and
//! holds the pieces only the binary needs: runtime configuration and the
//! JSON-lines session log.

pub mod config;
pub mod event_log;

pub use tui_match3_core as core;
pub use tui_match3_input as input;
pub use tui_match3_term as term;
pub use tui_match3_types as types;
