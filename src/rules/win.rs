//! Win detection logic.

use crate::board::Board;
use crate::types::{Mark, Square};
use tracing::instrument;

/// All 8 winning lines as `(row, col)` triples: 3 rows, 3 columns,
/// both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [(ar, ac), (br, bc), (cr, cc)] in LINES {
        let sq = board.get(ar, ac);
        if sq != Square::Empty && sq == board.get(br, bc) && sq == board.get(cr, cc) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
