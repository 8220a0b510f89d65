//! Game state module - owns one match-3 session
//!
//! This module ties together the board, the symbol source, run detection,
//! refill and scoring. A swap is resolved in exactly one cycle:
//!
//! ```text
//! Idle --select--> Selected(coord) --select--> Resolving --> Idle
//! ```
//!
//! Resolving swaps the two cells, detects runs, and either clears + refills
//! (scoring one point per cleared cell) or swaps the cells back.

use crate::board::{check_size, check_symbol_count, Board};
use crate::gravity::refill;
use crate::matcher::{clear_matches, detect_matches, MatchSet};
use crate::rng::{SimpleRng, SymbolSource};
use crate::types::*;
use crate::EngineError;

/// Result of one resolution cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub a: Coord,
    pub b: Coord,
    /// Cells that formed runs after the swap; empty when the swap was reverted
    pub matched: MatchSet,
    pub score_delta: u32,
}

impl SwapOutcome {
    /// Whether the swap produced a run and stuck
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// What a single `select` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First coordinate stored, waiting for the second
    Selected(Coord),
    /// Second coordinate consumed the selection and a swap was resolved
    Resolved(SwapOutcome),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    source: S,
    symbol_count: u8,
    selection: Option<Coord>,
    cursor: Coord,
    /// Monotonic counter of dealt boards (starts at 1).
    game_id: u32,
    /// Swap requests resolved in this session, reverted ones included.
    swaps: u32,
    score: u32,
    last_outcome: Option<SwapOutcome>,
    flash_ms: u32,
}

impl GameState<SimpleRng> {
    /// Default 8x8 board with four symbols, seeded
    pub fn new(seed: u32) -> Self {
        let mut source = SimpleRng::new(seed);
        let board = Board::generate(DEFAULT_BOARD_SIZE, DEFAULT_SYMBOL_COUNT, &mut source);
        Self::assemble(board, DEFAULT_SYMBOL_COUNT, source)
    }

    /// Random board of the given dimensions, seeded
    pub fn initialize(size: u8, symbol_count: u8, seed: u32) -> Result<Self, EngineError> {
        Self::with_source(size, symbol_count, SimpleRng::new(seed))
    }
}

impl<S: SymbolSource> GameState<S> {
    /// Random board drawn from an injected symbol source
    pub fn with_source(size: u8, symbol_count: u8, mut source: S) -> Result<Self, EngineError> {
        let board = Board::random(size, symbol_count, &mut source)?;
        Ok(Self::assemble(board, symbol_count, source))
    }

    /// Start from an explicit board; `source` is only used for refills and new games.
    pub fn from_board(board: Board, symbol_count: u8, source: S) -> Result<Self, EngineError> {
        check_size(board.size() as usize)?;
        check_symbol_count(symbol_count)?;
        if let Some(at) = board.first_invalid(symbol_count) {
            return Err(EngineError::InvalidCell {
                row: at.row,
                col: at.col,
            });
        }
        Ok(Self::assemble(board, symbol_count, source))
    }

    fn assemble(board: Board, symbol_count: u8, source: S) -> Self {
        Self {
            board,
            source,
            symbol_count,
            selection: None,
            cursor: Coord::default(),
            game_id: 1,
            swaps: 0,
            score: 0,
            last_outcome: None,
            flash_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn symbol_count(&self) -> u8 {
        self.symbol_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn last_outcome(&self) -> Option<&SwapOutcome> {
        self.last_outcome.as_ref()
    }

    /// Cells of the last successful resolution, while they are still highlighted
    pub fn flash(&self) -> Option<&MatchSet> {
        if self.flash_ms == 0 {
            return None;
        }
        self.last_outcome
            .as_ref()
            .filter(|o| o.is_match())
            .map(|o| &o.matched)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Swap two cells and resolve the result in one cycle.
    ///
    /// Any two cells may be swapped; adjacency is not required. A swap that
    /// forms no run is undone. Out-of-range coordinates are rejected before
    /// anything changes.
    pub fn request_swap(&mut self, a: Coord, b: Coord) -> Result<SwapOutcome, EngineError> {
        self.board.swap(a, b)?;
        self.swaps = self.swaps.saturating_add(1);

        let matched = detect_matches(&self.board);
        let outcome = if matched.is_empty() {
            self.board.swap(a, b)?;
            SwapOutcome {
                a,
                b,
                matched,
                score_delta: 0,
            }
        } else {
            let cleared = clear_matches(&mut self.board, &matched);
            self.score = self.score.saturating_add(cleared);
            refill(&mut self.board, self.symbol_count, &mut self.source);
            self.flash_ms = MATCH_FLASH_MS;
            SwapOutcome {
                a,
                b,
                matched,
                score_delta: cleared,
            }
        };

        debug_assert!(self.board.is_settled());
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Feed one selected cell into the selection state machine.
    ///
    /// The second call always consumes the pending selection, whether the swap
    /// sticks or is reverted.
    pub fn select(&mut self, at: Coord) -> Result<SelectOutcome, EngineError> {
        self.board.check(at)?;
        match self.selection.take() {
            None => {
                self.selection = Some(at);
                Ok(SelectOutcome::Selected(at))
            }
            Some(first) => self.request_swap(first, at).map(SelectOutcome::Resolved),
        }
    }

    /// Drop the pending selection. Returns whether there was one.
    pub fn cancel_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Place the cursor; out-of-range coordinates are rejected.
    pub fn set_cursor(&mut self, at: Coord) -> Result<(), EngineError> {
        self.board.check(at)?;
        self.cursor = at;
        Ok(())
    }

    /// Deal a fresh board of the same dimensions. The score carries over.
    pub fn new_game(&mut self) {
        self.deal(self.board.size(), self.symbol_count);
    }

    /// Deal a fresh board with new dimensions. The score carries over.
    ///
    /// Rejected dimensions leave the session untouched.
    pub fn new_game_with(&mut self, size: u8, symbol_count: u8) -> Result<(), EngineError> {
        check_size(size as usize)?;
        check_symbol_count(symbol_count)?;
        self.deal(size, symbol_count);
        Ok(())
    }

    fn deal(&mut self, size: u8, symbol_count: u8) {
        self.board = Board::generate(size, symbol_count, &mut self.source);
        self.symbol_count = symbol_count;
        self.cursor = Coord::new(self.cursor.row.min(size - 1), self.cursor.col.min(size - 1));
        self.selection = None;
        self.last_outcome = None;
        self.flash_ms = 0;
        self.game_id = self.game_id.saturating_add(1);
    }

    /// Deal a fresh board and zero the score and swap counter.
    pub fn restart(&mut self) {
        self.new_game();
        self.score = 0;
        self.swaps = 0;
    }

    /// Apply a front-end action.
    ///
    /// Returns the selection outcome for `Select`, `None` for everything else.
    pub fn apply_action(&mut self, action: GameAction) -> Option<SelectOutcome> {
        match action {
            GameAction::Move(dir) => {
                self.cursor = self.cursor.step(dir, self.board.size());
                None
            }
            GameAction::Select => self.select(self.cursor).ok(),
            GameAction::Cancel => {
                self.cancel_selection();
                None
            }
            GameAction::NewGame => {
                self.new_game();
                None
            }
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }

    /// Advance game time. Only the match highlight is time-based.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn striped() -> Board {
        // No runs anywhere; swapping (0,2) and (1,2) completes row 0.
        Board::from_rows(&[
            [0u8, 0, 1, 2],
            [1, 2, 0, 3],
            [2, 3, 1, 0],
            [3, 0, 2, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_game_state_defaults() {
        let gs = GameState::new(12345);
        assert_eq!(gs.size(), DEFAULT_BOARD_SIZE);
        assert_eq!(gs.symbol_count(), DEFAULT_SYMBOL_COUNT);
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.selection(), None);
        assert_eq!(gs.game_id(), 1);
        assert!(gs.board().first_invalid(DEFAULT_SYMBOL_COUNT).is_none());
    }

    #[test]
    fn test_successful_swap_scores_and_flashes() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![3])).unwrap();
        let outcome = gs.request_swap(Coord::new(0, 2), Coord::new(1, 2)).unwrap();

        assert!(outcome.is_match());
        assert_eq!(outcome.score_delta, 3);
        assert_eq!(gs.score(), 3);
        assert!(gs.flash().is_some());

        gs.tick(MATCH_FLASH_MS);
        assert!(gs.flash().is_none());
    }

    #[test]
    fn test_reverted_swap_restores_board() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![3])).unwrap();
        let before = gs.board().clone();
        let outcome = gs.request_swap(Coord::new(3, 3), Coord::new(0, 0)).unwrap();

        assert!(!outcome.is_match());
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(gs.board(), &before);
        assert_eq!(gs.swaps(), 1);
        assert!(gs.flash().is_none());
    }

    #[test]
    fn test_select_consumes_selection_on_revert() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![3])).unwrap();
        assert_eq!(
            gs.select(Coord::new(0, 0)).unwrap(),
            SelectOutcome::Selected(Coord::new(0, 0))
        );
        assert_eq!(gs.selection(), Some(Coord::new(0, 0)));

        match gs.select(Coord::new(0, 0)).unwrap() {
            SelectOutcome::Resolved(o) => assert!(!o.is_match()),
            other => panic!("expected resolution, got {:?}", other),
        }
        assert_eq!(gs.selection(), None);
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![3])).unwrap();
        gs.select(Coord::new(1, 1)).unwrap();
        assert!(gs.select(Coord::new(4, 0)).is_err());
        assert_eq!(gs.selection(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_from_board_rejects_foreign_symbols() {
        let board = Board::from_rows(&[[0u8, 1, 2], [1, 2, 0], [2, 0, 5]]).unwrap();
        let err = GameState::from_board(board, 4, ScriptedSource::new(vec![0])).unwrap_err();
        assert_eq!(err, EngineError::InvalidCell { row: 2, col: 2 });
    }

    #[test]
    fn test_new_game_with_resizes_and_keeps_score() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![1, 2, 3])).unwrap();
        gs.request_swap(Coord::new(0, 2), Coord::new(1, 2)).unwrap();
        gs.set_cursor(Coord::new(3, 2)).unwrap();
        gs.select(Coord::new(1, 1)).unwrap();
        let drawn = gs.source().drawn();

        gs.new_game_with(3, 2).unwrap();
        assert_eq!(gs.size(), 3);
        assert_eq!(gs.symbol_count(), 2);
        assert_eq!(gs.score(), 3);
        assert_eq!(gs.selection(), None);
        assert_eq!(gs.cursor(), Coord::new(2, 2));
        assert_eq!(gs.game_id(), 2);
        assert_eq!(gs.board().first_invalid(2), None);
        assert_eq!(gs.source().drawn(), drawn + 9);
    }

    #[test]
    fn test_new_game_with_rejects_bad_dimensions() {
        let mut gs = GameState::from_board(striped(), 4, ScriptedSource::new(vec![3])).unwrap();
        gs.select(Coord::new(1, 1)).unwrap();
        let before = gs.board().clone();

        assert_eq!(
            gs.new_game_with(MAX_BOARD_SIZE + 1, 4),
            Err(EngineError::InvalidSize {
                size: MAX_BOARD_SIZE as usize + 1
            })
        );
        assert_eq!(
            gs.new_game_with(5, 1),
            Err(EngineError::InvalidSymbolCount { symbol_count: 1 })
        );
        assert_eq!(gs.board(), &before);
        assert_eq!(gs.symbol_count(), 4);
        assert_eq!(gs.selection(), Some(Coord::new(1, 1)));
        assert_eq!(gs.game_id(), 1);
    }

    #[test]
    fn test_cursor_actions_clamp() {
        let mut gs = GameState::new(1);
        gs.apply_action(GameAction::Move(Direction::Up));
        assert_eq!(gs.cursor(), Coord::new(0, 0));
        for _ in 0..20 {
            gs.apply_action(GameAction::Move(Direction::Right));
        }
        assert_eq!(gs.cursor(), Coord::new(0, DEFAULT_BOARD_SIZE - 1));
    }

    #[test]
    fn test_select_action_uses_cursor() {
        let mut gs = GameState::new(1);
        gs.apply_action(GameAction::Move(Direction::Down));
        let out = gs.apply_action(GameAction::Select);
        assert_eq!(out, Some(SelectOutcome::Selected(Coord::new(1, 0))));
        gs.apply_action(GameAction::Cancel);
        assert_eq!(gs.selection(), None);
    }
}
