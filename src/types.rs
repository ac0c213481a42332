//! Core domain types for the concurrent tic-tac-toe match.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// Terminal classification of the game.
///
/// `Pending` is the only non-terminal variant; the game is finished exactly
/// when the outcome is not `Pending`, and a finished outcome never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is still in progress.
    Pending,
    /// The given mark completed three in a row.
    Won(Mark),
    /// Board full with no winning line.
    Draw,
}

impl Outcome {
    /// Whether the game is still in progress.
    pub fn is_pending(self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_eq!(mark.opponent().opponent(), mark);
            assert_ne!(mark.opponent(), mark);
        }
    }

    #[test]
    fn test_outcome_pending() {
        assert!(Outcome::Pending.is_pending());
        assert!(!Outcome::Won(Mark::X).is_pending());
        assert!(!Outcome::Draw.is_pending());
    }
}
