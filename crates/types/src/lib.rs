//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal view, and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The default board is a square 8x8 grid holding four kinds of symbols.
//! Other square sizes are allowed within [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
//!
//! - **Rows**: indexed top to bottom, row 0 is the top of the board
//! - **Columns**: indexed left to right
//! - **Refill**: new symbols always enter from the top
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed timestep interval (~30 FPS) |
//! | `MATCH_FLASH_MS` | 240 | Highlight duration for freshly cleared cells |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coord, GameAction, DEFAULT_BOARD_SIZE};
//!
//! let c = Coord::new(2, 5);
//! assert_eq!(c.row, 2);
//! assert_eq!(c.col, 5);
//! assert!(c.in_bounds(DEFAULT_BOARD_SIZE));
//!
//! let action = GameAction::from_str("newGame").unwrap();
//! assert_eq!(action, GameAction::NewGame);
//! ```

/// Default board side length (8x8)
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Default number of distinct symbols
pub const DEFAULT_SYMBOL_COUNT: u8 = 4;

/// Minimum length of a run that gets cleared
pub const MIN_RUN: u8 = 3;

/// Smallest board that can hold a run
pub const MIN_BOARD_SIZE: u8 = MIN_RUN;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 16;

/// Fewest symbol kinds a game may use
pub const MIN_SYMBOL_COUNT: u8 = 2;

/// Most symbol kinds a game may use (one per palette entry)
pub const MAX_SYMBOL_COUNT: u8 = 8;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 33;

/// How long the cells of the last resolution stay highlighted
pub const MATCH_FLASH_MS: u32 = 240;

/// A symbol identifier in `[0, symbol_count)`
pub type Symbol = u8;

/// A cell on the board
///
/// - `Some(symbol)`: a live symbol
/// - `None`: cleared, only ever seen between a clear and the refill that follows it
pub type Cell = Option<Symbol>;

/// A board position. Row 0 is the top row.
///
/// Ordering is row-major so sets of coordinates iterate top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on a `size` x `size` board
    pub fn in_bounds(&self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Move by one step in the given direction, clamped to a `size` x `size` board
    pub fn step(self, dir: Direction, size: u8) -> Self {
        let last = size.saturating_sub(1);
        match dir {
            Direction::Up => Self::new(self.row.saturating_sub(1), self.col),
            Direction::Down => Self::new((self.row + 1).min(last), self.col),
            Direction::Left => Self::new(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::new(self.row, (self.col + 1).min(last)),
        }
    }
}

/// Cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Game actions that can be applied to a session
///
/// Keyboard input is translated into these; mouse clicks select cells directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell
    Move(Direction),
    /// Select the cell under the cursor (second select performs the swap)
    Select,
    /// Drop the pending selection, if any
    Cancel,
    /// Deal a fresh board, keeping the score
    NewGame,
    /// Deal a fresh board and reset the score
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "select" => Some(GameAction::Select),
            "cancel" => Some(GameAction::Cancel),
            "newgame" => Some(GameAction::NewGame),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Select => "select",
            GameAction::Cancel => "cancel",
            GameAction::NewGame => "newGame",
            GameAction::Restart => "restart",
        }
    }
}
