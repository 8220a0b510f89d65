//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Mouse clicks
//! need the board layout, so they are resolved by the terminal view instead.

pub mod map;

pub use tui_match3_types as types;

pub use map::{handle_key_event, should_quit};
