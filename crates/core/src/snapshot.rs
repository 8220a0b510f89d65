//! Snapshot module - plain-data view of a session
//!
//! Renderers read a `GameSnapshot` instead of borrowing `GameState`, and the
//! frame loop refills one snapshot in place with `snapshot_into`.

use crate::game_state::GameState;
use crate::rng::SymbolSource;
use crate::types::{Coord, Symbol, DEFAULT_BOARD_SIZE, DEFAULT_SYMBOL_COUNT};

/// Plain-data copy of a session for rendering and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub size: u8,
    pub symbol_count: u8,
    /// Row-major symbols, `size * size` long
    pub board: Vec<Symbol>,
    pub cursor: Coord,
    pub selection: Option<Coord>,
    /// Cells still highlighted from the last successful swap
    pub flash: Vec<Coord>,
    pub score: u32,
    pub last_delta: u32,
    pub swaps: u32,
    pub game_id: u32,
}

impl GameSnapshot {
    pub fn symbol_at(&self, at: Coord) -> Option<Symbol> {
        if !at.in_bounds(self.size) {
            return None;
        }
        self.board
            .get((at.row as usize) * (self.size as usize) + (at.col as usize))
            .copied()
    }

    pub fn is_flashing(&self, at: Coord) -> bool {
        self.flash.contains(&at)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let len = (DEFAULT_BOARD_SIZE as usize) * (DEFAULT_BOARD_SIZE as usize);
        Self {
            size: DEFAULT_BOARD_SIZE,
            symbol_count: DEFAULT_SYMBOL_COUNT,
            board: vec![0; len],
            cursor: Coord::default(),
            selection: None,
            flash: Vec::new(),
            score: 0,
            last_delta: 0,
            swaps: 0,
            game_id: 0,
        }
    }
}

impl<S: SymbolSource> GameState<S> {
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Overwrite `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.size();
        out.symbol_count = self.symbol_count();
        out.board.clear();
        out.board
            .extend(self.board().cells().iter().map(|c| c.unwrap_or_default()));
        out.cursor = self.cursor();
        out.selection = self.selection();
        out.flash.clear();
        if let Some(cells) = self.flash() {
            out.flash.extend(cells.iter().copied());
        }
        out.score = self.score();
        out.last_delta = self.last_outcome().map(|o| o.score_delta).unwrap_or(0);
        out.swaps = self.swaps();
        out.game_id = self.game_id();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rng::ScriptedSource;

    #[test]
    fn snapshot_copies_board_row_major() {
        let board = Board::from_rows(&[[0u8, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
        let gs = GameState::from_board(board, 3, ScriptedSource::new(vec![0])).unwrap();
        let snap = gs.snapshot();
        assert_eq!(snap.size, 3);
        assert_eq!(snap.board, vec![0, 1, 2, 1, 2, 0, 2, 0, 1]);
        assert_eq!(snap.symbol_at(Coord::new(1, 2)), Some(0));
        assert_eq!(snap.symbol_at(Coord::new(3, 0)), None);
    }

    #[test]
    fn snapshot_into_replaces_previous_contents() {
        let gs = GameState::new(9);
        let mut snap = GameSnapshot {
            flash: vec![Coord::new(0, 0)],
            score: 99,
            ..GameSnapshot::default()
        };
        gs.snapshot_into(&mut snap);
        assert!(snap.flash.is_empty());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.board.len(), 64);
    }
}
