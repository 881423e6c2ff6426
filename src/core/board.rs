//! Board module - manages the gem grid
//!
//! The board is an 8x8 grid where each cell can be empty or filled with a gem kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..7 (left to right), y ranges 0..7 (top to bottom)

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rng::SimpleRng;
use crate::types::{Cell, GemMove, GEM_KINDS, GEM_KIND_COUNT, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Errors raised at the board's caller boundary.
///
/// Both are local, recoverable conditions: the caller drops the offending
/// move and the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i8, y: i8 },

    #[error("swap cells are not orthogonal neighbors")]
    NotAdjacent,
}

/// The game board - 8 columns x 8 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Gem kind at position (x, y); None for empty cells and out-of-bounds
    /// probes alike. Convenient for run scanning at the board edges.
    pub fn gem_at(&self, x: i8, y: i8) -> Cell {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Exchange the contents of two adjacent cells in place.
    ///
    /// Fails with `OutOfBounds` before `NotAdjacent`, and never mutates on
    /// failure. No match validation happens here; that is the validator's job.
    pub fn swap(&mut self, mv: GemMove) -> Result<(), BoardError> {
        let a = Self::index(mv.from.0, mv.from.1).ok_or(BoardError::OutOfBounds {
            x: mv.from.0,
            y: mv.from.1,
        })?;
        let b = Self::index(mv.to.0, mv.to.1).ok_or(BoardError::OutOfBounds {
            x: mv.to.0,
            y: mv.to.1,
        })?;
        if !mv.is_adjacent() {
            return Err(BoardError::NotAdjacent);
        }
        self.cells.swap(a, b);
        Ok(())
    }

    /// Fill the whole board with random gems such that no immediate match exists.
    ///
    /// Each cell excludes any kind that would complete a 3-run with the two
    /// already-placed neighbors to its left or above it.
    pub fn fill_random(&mut self, rng: &mut SimpleRng) {
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let left_pair = self.gem_at(x - 1, y).filter(|&g| self.gem_at(x - 2, y) == Some(g));
                let up_pair = self.gem_at(x, y - 1).filter(|&g| self.gem_at(x, y - 2) == Some(g));

                let mut candidates: ArrayVec<_, { GEM_KIND_COUNT as usize }> = ArrayVec::new();
                for kind in GEM_KINDS {
                    if Some(kind) != left_pair && Some(kind) != up_pair {
                        candidates.push(kind);
                    }
                }

                let pick = rng.next_range(candidates.len() as u32) as usize;
                self.set(x, y, Some(candidates[pick]));
            }
        }
    }

    /// Number of non-empty cells in a column
    pub fn column_gem_count(&self, x: i8) -> usize {
        (0..BOARD_HEIGHT as i8)
            .filter(|&y| self.gem_at(x, y).is_some())
            .count()
    }

    /// Write the board into a u8 grid (0 = empty, 1..=7 = gem index + 1),
    /// the snapshot format consumed by renderers
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector (outer index is the row, top to bottom)
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector of rows for testing/display
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                let end = start + width;
                self.cells[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
