//! Error types for engine operations.
//!
//! Rejected calls never mutate the board, the score, or the selection.

use thiserror::Error;

use crate::types::{MAX_BOARD_SIZE, MAX_SYMBOL_COUNT, MIN_BOARD_SIZE, MIN_SYMBOL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: u8 },

    #[error("board size {size} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidSize { size: usize },

    #[error(
        "symbol count {symbol_count} is outside {min}..={max}",
        min = MIN_SYMBOL_COUNT,
        max = MAX_SYMBOL_COUNT
    )]
    InvalidSymbolCount { symbol_count: u8 },

    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },

    #[error("cell ({row}, {col}) does not hold a valid symbol")]
    InvalidCell { row: u8, col: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = EngineError::OutOfBounds {
            row: 9,
            col: 0,
            size: 8,
        };
        assert_eq!(err.to_string(), "coordinate (9, 0) is outside the 8x8 board");
    }

    #[test]
    fn invalid_symbol_count_display() {
        let err = EngineError::InvalidSymbolCount { symbol_count: 12 };
        assert_eq!(err.to_string(), "symbol count 12 is outside 2..=8");
    }
}
