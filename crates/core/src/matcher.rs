//! Run detection and clearing
//!
//! A run is three or more equal symbols in a row or column. Detection only
//! looks at triples: every window of [`MIN_RUN`] equal cells contributes its
//! coordinates, and set union merges overlapping windows into longer runs.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Coord, MIN_RUN};

/// Coordinates found in one detection pass, row-major order
pub type MatchSet = BTreeSet<Coord>;

/// Find every cell that belongs to a horizontal or vertical run.
///
/// Cleared cells never match, not even each other.
pub fn detect_matches(board: &Board) -> MatchSet {
    let mut matches = MatchSet::new();
    let size = board.size();
    let window = MIN_RUN;
    let last_start = size.saturating_sub(window - 1);

    for r in 0..size {
        for c in 0..last_start {
            let run = (0..window).map(|i| Coord::new(r, c + i));
            collect_if_equal(board, run, &mut matches);
        }
    }

    for c in 0..size {
        for r in 0..last_start {
            let run = (0..window).map(|i| Coord::new(r + i, c));
            collect_if_equal(board, run, &mut matches);
        }
    }

    matches
}

fn collect_if_equal(board: &Board, run: impl Iterator<Item = Coord> + Clone, out: &mut MatchSet) {
    let mut symbols = run.clone().map(|at| board.symbol(at));
    let first = match symbols.next() {
        Some(Some(s)) => s,
        _ => return,
    };
    if symbols.all(|s| s == Some(first)) {
        out.extend(run);
    }
}

/// Mark every matched cell as cleared and return how many were cleared.
pub fn clear_matches(board: &mut Board, matches: &MatchSet) -> u32 {
    let mut cleared = 0;
    for &at in matches {
        if board.set(at, None) {
            cleared += 1;
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(list: &[(u8, u8)]) -> MatchSet {
        list.iter().map(|&(r, c)| Coord::new(r, c)).collect()
    }

    #[test]
    fn test_no_runs_on_checkerboard() {
        let board = Board::from_rows(&[[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        assert!(detect_matches(&board).is_empty());
    }

    #[test]
    fn test_horizontal_triple() {
        let board = Board::from_rows(&[[2u8, 2, 2], [1, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!(detect_matches(&board), coords(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn test_vertical_triple() {
        let board = Board::from_rows(&[[3u8, 1, 0], [3, 0, 1], [3, 1, 0]]).unwrap();
        assert_eq!(detect_matches(&board), coords(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_crossing_runs_share_a_cell() {
        let board = Board::from_rows(&[[0u8, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap();
        assert_eq!(
            detect_matches(&board),
            coords(&[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)])
        );
    }

    #[test]
    fn test_cleared_cells_do_not_match() {
        let mut board = Board::from_rows(&[[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        for c in 0..3 {
            board.set(Coord::new(0, c), None);
        }
        assert!(detect_matches(&board).is_empty());
    }

    #[test]
    fn test_clear_matches_sets_sentinel() {
        let mut board = Board::from_rows(&[[2u8, 2, 2], [1, 0, 1], [0, 1, 0]]).unwrap();
        let found = detect_matches(&board);
        assert_eq!(clear_matches(&mut board, &found), 3);
        assert_eq!(board.row(0), &[None, None, None]);
        assert_eq!(board.cleared_count(), 3);
    }
}
