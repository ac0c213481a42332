//! The shared synchronized game state.
//!
//! One [`Game`] instance exists per match. Both agents hold it through an
//! `Arc` and call [`Game::attempt_move`] concurrently; a single mutex over
//! the whole state plus a condition variable serialize acceptance and
//! signal turn changes. The wait predicate includes the finished check, so
//! an agent blocked on a turn that will never come is released when its
//! opponent ends the game.

use crate::board::{Board, SIZE};
use crate::rules::{check_winner, is_draw};
use crate::types::{Mark, Outcome, Square};
use derive_getters::Getters;
use std::sync::{Condvar, Mutex};
use tracing::{debug, info, instrument};

/// Snapshot of everything the mutex protects: board, turn marker, and
/// outcome.
///
/// The outcome doubles as the finished flag: the game is finished exactly
/// when it is not [`Outcome::Pending`], so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark whose turn it is.
    to_move: Mark,
    /// Terminal classification, `Pending` while in progress.
    outcome: Outcome,
}

impl GameState {
    fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::Pending,
        }
    }
}

/// The shared game: a [`GameState`] guarded by one mutex, with a condition
/// variable for turn alternation.
///
/// All suspension happens inside [`attempt_move`]; the read accessors
/// lock, copy, and release without blocking on the turn.
///
/// [`attempt_move`]: Game::attempt_move
#[derive(Debug)]
pub struct Game {
    state: Mutex<GameState>,
    turn: Condvar,
}

impl Game {
    /// Creates a new game with an empty board; X moves first.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GameState::new()),
            turn: Condvar::new(),
        }
    }

    /// Proposes placing `mark` at `(row, col)`.
    ///
    /// Blocks until `mark` has the turn or the game is finished, then
    /// re-checks under the lock: a finished game or an occupied cell
    /// rejects the proposal with `false` and no state change. Otherwise
    /// the mark is placed, the outcome re-evaluated (win before draw),
    /// the turn flipped on a non-terminal move, and every waiter woken.
    ///
    /// Rejection is expected steady-state traffic, not an error; retry
    /// policy belongs to the caller.
    ///
    /// `row` and `col` must be in `0..3`; this is a caller-discipline
    /// precondition, checked with `debug_assert!` at the boundary.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, mark: Mark, row: usize, col: usize) -> bool {
        debug_assert!(row < SIZE && col < SIZE, "coordinates out of range");

        let guard = self.state.lock().unwrap();
        let mut state = self
            .turn
            .wait_while(guard, |s| {
                s.outcome.is_pending() && s.to_move != mark
            })
            .unwrap();

        // The game may have ended while we waited, or the proposal may
        // target a cell filled on an earlier turn.
        if !state.outcome.is_pending() || !state.board.is_empty(row, col) {
            debug!(%mark, row, col, "move rejected");
            return false;
        }

        state.board.set(row, col, Square::Occupied(mark));

        if check_winner(&state.board) == Some(mark) {
            state.outcome = Outcome::Won(mark);
            info!(%mark, row, col, "winning move placed");
        } else if is_draw(&state.board) {
            state.outcome = Outcome::Draw;
            info!(%mark, row, col, "final move placed, game drawn");
        } else {
            state.to_move = mark.opponent();
            debug!(%mark, row, col, "move placed");
        }

        // Broadcast: a finished game must release the loser too, not just
        // the rightful next mover.
        self.turn.notify_all();
        true
    }

    /// Whether the game has reached a terminal outcome.
    pub fn is_finished(&self) -> bool {
        !self.state.lock().unwrap().outcome.is_pending()
    }

    /// The game's outcome; `Pending` until [`is_finished`] is true.
    ///
    /// [`is_finished`]: Game::is_finished
    pub fn outcome(&self) -> Outcome {
        self.state.lock().unwrap().outcome
    }

    /// Lock-protected clone of the full state, for rendering and
    /// invariant checks.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().unwrap().clone()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
