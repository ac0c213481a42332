//! Board rendering collaborators.
//!
//! Rendering is observational only; it reads the game through
//! [`Game::snapshot`] and plays no part in the synchronization contract.
//!
//! [`Game::snapshot`]: crate::Game::snapshot

use crate::board::Board;
use std::io::{self, Write};

/// A collaborator that draws the board after a successful move.
pub trait Render: Send {
    /// Draws the given board.
    fn draw(&mut self, board: &Board);
}

/// Console renderer: clears the screen and prints the grid.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    /// Creates a console renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Render for Console {
    fn draw(&mut self, board: &Board) {
        let mut out = io::stdout().lock();
        // ANSI clear-screen + cursor home.
        let _ = write!(out, "\x1b[2J\x1b[1;1H");
        let _ = writeln!(out, "Board:");
        let _ = write!(out, "{}", board.display());
        let _ = writeln!(out);
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Mark, Square};

    /// Renderer that records every board it is handed.
    pub struct Recorder {
        pub frames: Vec<Board>,
    }

    impl Render for Recorder {
        fn draw(&mut self, board: &Board) {
            self.frames.push(board.clone());
        }
    }

    #[test]
    fn test_recorder_collects_frames() {
        let mut recorder = Recorder { frames: Vec::new() };
        let mut board = Board::new();
        board.set(0, 0, Square::Occupied(Mark::X));
        recorder.draw(&board);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0], board);
    }
}
