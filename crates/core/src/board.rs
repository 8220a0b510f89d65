//! Board module - manages the symbol grid
//!
//! The board is a square grid where each cell holds a symbol identifier, or the
//! cleared sentinel (`None`) between a clear and the refill that follows it.
//! Uses a flat row-major vector so a whole board is one allocation.
//! Coordinates are (row, col) with row 0 at the top.

use crate::error::EngineError;
use crate::rng::SymbolSource;
use crate::types::{
    Cell, Coord, Symbol, MAX_BOARD_SIZE, MAX_SYMBOL_COUNT, MIN_BOARD_SIZE, MIN_SYMBOL_COUNT,
};

/// The game board - `size` x `size` cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Fill a new board with random symbols from `source`.
    ///
    /// No attempt is made to avoid runs that already exist on the fresh board.
    pub fn random<S: SymbolSource + ?Sized>(
        size: u8,
        symbol_count: u8,
        source: &mut S,
    ) -> Result<Self, EngineError> {
        check_size(size as usize)?;
        check_symbol_count(symbol_count)?;
        Ok(Self::generate(size, symbol_count, source))
    }

    /// Random fill for dimensions that were already validated.
    pub(crate) fn generate<S: SymbolSource + ?Sized>(
        size: u8,
        symbol_count: u8,
        source: &mut S,
    ) -> Self {
        let len = (size as usize) * (size as usize);
        let cells = (0..len)
            .map(|_| Some(source.next_symbol(symbol_count)))
            .collect();
        Self { size, cells }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Rows must form a square within the supported size range.
    pub fn from_rows<R: AsRef<[Symbol]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::RaggedRow {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            cells.extend(row.iter().map(|&s| Some(s)));
        }

        Ok(Self {
            size: size as u8,
            cells,
        })
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if !at.in_bounds(self.size) {
            return None;
        }
        Some((at.row as usize) * (self.size as usize) + (at.col as usize))
    }

    /// Bounds check that reports the offending coordinate
    pub fn check(&self, at: Coord) -> Result<(), EngineError> {
        if at.in_bounds(self.size) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: at.row,
                col: at.col,
                size: self.size,
            })
        }
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|idx| self.cells[idx])
    }

    /// Symbol at a coordinate, `None` when out of bounds or cleared
    pub fn symbol(&self, at: Coord) -> Option<Symbol> {
        self.get(at).flatten()
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, at: Coord, cell: Cell) -> bool {
        match self.index(at) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange two cells. Both coordinates are checked before anything moves.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), EngineError> {
        self.check(a)?;
        self.check(b)?;
        if let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) {
            self.cells.swap(ia, ib);
        }
        Ok(())
    }

    /// One row, left to right
    pub fn row(&self, row: u8) -> &[Cell] {
        let n = self.size as usize;
        let start = (row as usize).min(n) * n;
        &self.cells[start..(start + n).min(self.cells.len())]
    }

    /// Whether no cell holds the cleared sentinel
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of cells holding the cleared sentinel
    pub fn cleared_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// First cell that is cleared or holds a symbol `>= symbol_count`
    pub fn first_invalid(&self, symbol_count: u8) -> Option<Coord> {
        self.cells
            .iter()
            .position(|c| !matches!(c, Some(s) if *s < symbol_count))
            .map(|idx| self.coord_of(idx))
    }

    fn coord_of(&self, idx: usize) -> Coord {
        let n = self.size as usize;
        Coord::new((idx / n) as u8, (idx % n) as u8)
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Symbols as rows, cleared cells as `None` (for tests and debugging)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

pub(crate) fn check_size(size: usize) -> Result<(), EngineError> {
    if size < MIN_BOARD_SIZE as usize || size > MAX_BOARD_SIZE as usize {
        return Err(EngineError::InvalidSize { size });
    }
    Ok(())
}

pub(crate) fn check_symbol_count(symbol_count: u8) -> Result<(), EngineError> {
    if !(MIN_SYMBOL_COUNT..=MAX_SYMBOL_COUNT).contains(&symbol_count) {
        return Err(EngineError::InvalidSymbolCount { symbol_count });
    }
    Ok(())
}
