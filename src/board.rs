//! The 3×3 board.

use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// 3×3 tic-tac-toe board.
///
/// Cells are addressed by `(row, col)` with both indices in `0..3`.
/// The board is only ever mutated inside [`Game::attempt_move`]'s critical
/// section.
///
/// [`Game::attempt_move`]: crate::Game::attempt_move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the cell at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Square {
        self.cells[row][col]
    }

    /// Sets the cell at the given coordinates.
    pub fn set(&mut self, row: usize, col: usize, square: Square) {
        self.cells[row][col] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Square::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Cells in a row are separated by `" | "` and rows by a
    /// `"---+---+---"` divider.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIZE {
            result.push(' ');
            for col in 0..SIZE {
                let symbol = match self.cells[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < SIZE - 1 {
                    result.push_str(" | ");
                }
            }
            result.push('\n');
            if row < SIZE - 1 {
                result.push_str("---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
