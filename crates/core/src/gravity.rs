//! Refill - compacts surviving symbols downward and tops columns up
//!
//! Each column is handled on its own: survivors keep their top-to-bottom order
//! and sink to the bottom, and fresh symbols fill the vacated cells at the top.
//! A single pass; runs formed by the refill are left on the board.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SymbolSource;
use crate::types::{Coord, Symbol, MAX_BOARD_SIZE};

/// Refill every cleared cell and return how many new symbols were generated.
///
/// Within a column, the first symbol drawn lands directly above the survivors
/// and later draws stack on top of it.
pub fn refill<S: SymbolSource + ?Sized>(board: &mut Board, symbol_count: u8, source: &mut S) -> u32 {
    let size = board.size();
    let mut spawned = 0u32;

    for c in 0..size {
        let mut survivors: ArrayVec<Symbol, { MAX_BOARD_SIZE as usize }> = ArrayVec::new();
        for r in 0..size {
            if let Some(s) = board.symbol(Coord::new(r, c)) {
                survivors.push(s);
            }
        }

        let missing = size - survivors.len() as u8;
        if missing == 0 {
            continue;
        }

        for r in (0..missing).rev() {
            board.set(Coord::new(r, c), Some(source.next_symbol(symbol_count)));
        }
        for (i, &s) in survivors.iter().enumerate() {
            board.set(Coord::new(missing + i as u8, c), Some(s));
        }
        spawned += missing as u32;
    }

    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn column(board: &Board, c: u8) -> Vec<Option<Symbol>> {
        (0..board.size()).map(|r| board.get(Coord::new(r, c)).flatten()).collect()
    }

    #[test]
    fn test_untouched_board_draws_nothing() {
        let mut board = Board::from_rows(&[[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        let before = board.clone();
        let mut src = ScriptedSource::new(vec![3]);
        assert_eq!(refill(&mut board, 4, &mut src), 0);
        assert_eq!(board, before);
        assert_eq!(src.drawn(), 0);
    }

    #[test]
    fn test_survivors_fall_and_keep_order() {
        // Column 0 top to bottom: 1, _, 2, _  -> new, new, 1, 2
        let mut board = Board::from_rows(&[
            [1u8, 0, 0, 0],
            [3, 1, 1, 1],
            [2, 0, 0, 0],
            [3, 1, 1, 1],
        ])
        .unwrap();
        board.set(Coord::new(1, 0), None);
        board.set(Coord::new(3, 0), None);

        let mut src = ScriptedSource::new(vec![2, 3]);
        assert_eq!(refill(&mut board, 4, &mut src), 2);

        // First draw (2) sits right above the survivors, second (3) on top.
        assert_eq!(column(&board, 0), vec![Some(3), Some(2), Some(1), Some(2)]);
        assert_eq!(column(&board, 1), vec![Some(0), Some(1), Some(0), Some(1)]);
        assert!(board.is_settled());
    }

    #[test]
    fn test_fully_cleared_column() {
        let mut board = Board::from_rows(&[[0u8, 1, 0], [0, 0, 1], [0, 1, 0]]).unwrap();
        for r in 0..3 {
            board.set(Coord::new(r, 0), None);
        }
        let mut src = ScriptedSource::new(vec![1, 2, 3]);
        assert_eq!(refill(&mut board, 4, &mut src), 3);
        assert_eq!(column(&board, 0), vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn test_refill_does_not_cascade() {
        // Refill creates a fresh vertical run in column 0; it stays on the board.
        let mut board = Board::from_rows(&[[2u8, 1, 0], [1, 0, 1], [1, 1, 0]]).unwrap();
        board.set(Coord::new(0, 0), None);
        let mut src = ScriptedSource::new(vec![1]);
        refill(&mut board, 4, &mut src);
        assert_eq!(column(&board, 0), vec![Some(1), Some(1), Some(1)]);
        assert!(!crate::matcher::detect_matches(&board).is_empty());
    }
}
