//! First-class invariants over game state snapshots.
//!
//! Invariants are logical properties that must hold for every state the
//! synchronized game can publish. They are testable independently and
//! serve as documentation of the protocol's guarantees; the concurrency
//! stress tests check them against snapshots taken mid-game and at the
//! end.

use crate::board::SIZE;
use crate::game::GameState;
use crate::rules::{check_winner, is_draw};
use crate::types::{Mark, Outcome, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: mark counts stay balanced.
///
/// Turns strictly alternate starting with X, so at any snapshot the count
/// of X cells equals the count of O cells or exceeds it by one.
pub struct MarkBalanceInvariant;

fn count(state: &GameState, mark: Mark) -> usize {
    let mut total = 0;
    for row in 0..SIZE {
        for col in 0..SIZE {
            if state.board().get(row, col) == Square::Occupied(mark) {
                total += 1;
            }
        }
    }
    total
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = count(state, Mark::X);
        let o = count(state, Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X cell count equals O cell count or exceeds it by one"
    }
}

/// Invariant: the recorded outcome matches what the board shows.
///
/// `Won(m)` iff the board holds a winning line for `m`; `Draw` iff the
/// board is full with no winning line; `Pending` iff neither. Since the
/// finished flag is derived from the outcome, the two can never disagree.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.outcome() {
            Outcome::Won(mark) => check_winner(state.board()) == Some(*mark),
            Outcome::Draw => is_draw(state.board()),
            Outcome::Pending => {
                check_winner(state.board()).is_none() && !state.board().is_full()
            }
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board's winning lines and fill state"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, OutcomeConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_invariants_hold_for_new_game() {
        let state = Game::new().snapshot();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let game = Game::new();
        assert!(game.attempt_move(Mark::X, 0, 0));
        assert!(game.attempt_move(Mark::O, 1, 1));
        assert!(game.attempt_move(Mark::X, 0, 1));
        assert!(GameInvariants::check_all(&game.snapshot()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_win() {
        let game = Game::new();
        for (mark, row, col) in [
            (Mark::X, 0, 0),
            (Mark::O, 1, 0),
            (Mark::X, 0, 1),
            (Mark::O, 1, 1),
            (Mark::X, 0, 2),
        ] {
            assert!(game.attempt_move(mark, row, col));
        }
        assert!(GameInvariants::check_all(&game.snapshot()).is_ok());
    }

    #[test]
    fn test_violations_collected_with_descriptions() {
        struct AlwaysFails;

        impl Invariant<GameState> for AlwaysFails {
            fn holds(_state: &GameState) -> bool {
                false
            }

            fn description() -> &'static str {
                "always fails"
            }
        }

        type Failing = (MarkBalanceInvariant, AlwaysFails);
        let state = Game::new().snapshot();
        let violations = Failing::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, "always fails");
    }
}
