//! Draw detection logic.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the game is a draw: every cell occupied and no winning line.
///
/// Win detection takes priority; a full board with a winner is a win,
/// never a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.set(1, 1, Square::Occupied(Mark::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line
        let mut board = Board::new();
        let layout = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::X],
            [Mark::O, Mark::X, Mark::O],
        ];
        for (row, marks) in layout.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                board.set(row, col, Square::Occupied(*mark));
            }
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X fills everything - degenerate, but full and winning
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.set(row, col, Square::Occupied(Mark::X));
            }
        }
        assert!(!is_draw(&board));
    }
}
