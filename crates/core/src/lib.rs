//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules and session state. It has **no
//! dependencies** on terminal I/O, so it is:
//!
//! - **Deterministic**: the same seed deals the same boards and refills
//! - **Testable**: symbol sources can be scripted cell by cell
//! - **Portable**: the terminal front end is only one possible caller
//!
//! # Module Structure
//!
//! - [`board`]: square symbol grid with bounds-checked access
//! - [`matcher`]: horizontal/vertical run detection and clearing
//! - [`gravity`]: column compaction and top-up after a clear
//! - [`rng`]: [`SymbolSource`] trait, seeded LCG, scripted source
//! - [`game_state`]: selection state machine, swap resolution, score
//! - [`snapshot`]: plain-data view for renderers
//!
//! # Rules
//!
//! - Any two cells may be swapped; adjacency is not required
//! - A swap that forms no run of three is undone
//! - Every cleared cell scores one point, however long its run
//! - One clear and refill per swap; runs formed by the refill stay on the board
//! - Fresh boards are not checked for runs either
//!
//! # Example
//!
//! ```
//! use tui_match3_core::GameState;
//! use tui_match3_core::types::Coord;
//!
//! let mut game = GameState::new(12345);
//! let outcome = game.request_swap(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
//!
//! assert_eq!(game.score(), outcome.score_delta);
//! assert!(game.board().is_settled());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod gravity;
pub mod matcher;
pub mod rng;
pub mod snapshot;

pub use tui_match3_types as types;

pub use board::Board;
pub use error::EngineError;
pub use game_state::{GameState, SelectOutcome, SwapOutcome};
pub use gravity::refill;
pub use matcher::{clear_matches, detect_matches, MatchSet};
pub use rng::{ScriptedSource, SimpleRng, SymbolSource};
pub use snapshot::GameSnapshot;
