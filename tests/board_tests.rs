//! Board tests - grid access, bounds and construction

use tui_match3::core::{Board, EngineError, ScriptedSource, SimpleRng};
use tui_match3::types::{Coord, Symbol, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

fn small() -> Board {
    Board::from_rows(&[[0u8, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]]).unwrap()
}

#[test]
fn test_board_random_is_full_and_in_range() {
    let mut rng = SimpleRng::new(12345);
    let board = Board::random(8, 4, &mut rng).unwrap();

    assert_eq!(board.size(), 8);
    for r in 0..8 {
        for c in 0..8 {
            let s = board.symbol(Coord::new(r, c));
            assert!(matches!(s, Some(v) if v < 4), "cell ({}, {}) = {:?}", r, c, s);
        }
    }
}

#[test]
fn test_board_size_limits() {
    let mut src = ScriptedSource::new(vec![0, 1]);
    assert!(Board::random(MIN_BOARD_SIZE, 2, &mut src).is_ok());
    assert!(Board::random(MAX_BOARD_SIZE, 2, &mut src).is_ok());
    assert_eq!(
        Board::random(MAX_BOARD_SIZE + 1, 2, &mut src),
        Err(EngineError::InvalidSize {
            size: MAX_BOARD_SIZE as usize + 1
        })
    );

    let empty: Vec<Vec<Symbol>> = Vec::new();
    assert_eq!(
        Board::from_rows(&empty),
        Err(EngineError::InvalidSize { size: 0 })
    );
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = small();
    assert_eq!(board.get(Coord::new(4, 0)), None);
    assert_eq!(board.get(Coord::new(0, 4)), None);
    assert_eq!(board.get(Coord::new(3, 3)), Some(Some(2)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = small();
    assert!(board.set(Coord::new(2, 1), Some(0)));
    assert_eq!(board.symbol(Coord::new(2, 1)), Some(0));

    assert!(board.set(Coord::new(2, 1), None));
    assert_eq!(board.get(Coord::new(2, 1)), Some(None));
    assert_eq!(board.symbol(Coord::new(2, 1)), None);

    assert!(!board.set(Coord::new(9, 9), Some(1)));
}

#[test]
fn test_board_check_reports_coordinate() {
    let board = small();
    assert!(board.check(Coord::new(3, 3)).is_ok());
    assert_eq!(
        board.check(Coord::new(1, 4)),
        Err(EngineError::OutOfBounds {
            row: 1,
            col: 4,
            size: 4
        })
    );
}

#[test]
fn test_board_swap_and_back() {
    let mut board = small();
    let before = board.clone();
    board.swap(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
    assert_eq!(board.symbol(Coord::new(0, 0)), Some(2));
    assert_eq!(board.symbol(Coord::new(3, 3)), Some(0));

    board.swap(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_board_rows_round_trip() {
    let board = small();
    let rows = board.to_rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], vec![Some(1), Some(2), Some(3), Some(0)]);
    assert_eq!(board.row(1), rows[1].as_slice());
}
