//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders into a framebuffer that is flushed to
//! the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the view pure so layout and hit-testing can be unit-tested
//! - Send only changed glyphs to the terminal after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{symbol_glyph, BoardLayout, GameView, Viewport};
pub use renderer::{changed_runs, encode_changes, encode_full, TerminalRenderer};
