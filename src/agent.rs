//! Agents: independently scheduled players driving one mark each.

use crate::board::SIZE;
use crate::game::Game;
use crate::render::Render;
use crate::types::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Move-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Enumerate cells in row-major order, restarting the sweep each
    /// pass; pause after every proposal.
    Sequential,
    /// Draw row and column uniformly from `0..3`; pause only after a
    /// successful placement.
    Random,
}

/// One player: a handle to the shared game, an assigned mark, and a
/// selection policy.
///
/// An agent holds no mutable state visible to its opponent; all
/// coordination lives in [`Game`]. Created once per match and consumed by
/// [`run`], which returns once the game is finished.
///
/// [`run`]: Agent::run
pub struct Agent {
    game: Arc<Game>,
    mark: Mark,
    policy: Policy,
    pause: Duration,
    renderer: Option<Box<dyn Render>>,
}

impl Agent {
    /// Creates an agent bound to `mark`, proposing moves under `policy`
    /// and pausing for `pause` per the policy's pacing rule.
    pub fn new(game: Arc<Game>, mark: Mark, policy: Policy, pause: Duration) -> Self {
        Self {
            game,
            mark,
            policy,
            pause,
            renderer: None,
        }
    }

    /// Attaches a renderer invoked after each of this agent's successful
    /// placements.
    pub fn with_renderer(mut self, renderer: Box<dyn Render>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Plays until the game is finished.
    ///
    /// Rejected proposals are normal traffic; the loop keeps going. Both
    /// policies observe the finished flag each iteration and stop within
    /// a bounded number of extra proposals once the game ends.
    pub fn run(mut self) {
        debug!(mark = %self.mark, policy = %self.policy, "agent starting");
        match self.policy {
            Policy::Sequential => self.run_sequential(),
            Policy::Random => self.run_random(),
        }
        debug!(mark = %self.mark, "agent finished");
    }

    /// Row-major sweeps from (0,0), proposing every cell regardless of
    /// prior rejection, pausing after each attempt; bails out mid-pass
    /// once the game is finished.
    fn run_sequential(&mut self) {
        while !self.game.is_finished() {
            'pass: for row in 0..SIZE {
                for col in 0..SIZE {
                    if self.game.is_finished() {
                        break 'pass;
                    }
                    if self.game.attempt_move(self.mark, row, col) {
                        self.show_board();
                    }
                    thread::sleep(self.pause);
                }
            }
        }
    }

    /// Uniform random proposals; rejected proposals retry immediately,
    /// only a successful placement pauses.
    fn run_random(&mut self) {
        let mut rng = rand::rng();
        while !self.game.is_finished() {
            let row = rng.random_range(0..SIZE);
            let col = rng.random_range(0..SIZE);
            if self.game.attempt_move(self.mark, row, col) {
                self.show_board();
                thread::sleep(self.pause);
            }
        }
    }

    fn show_board(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            // Observational: the opponent may already have moved again by
            // the time the snapshot is taken.
            renderer.draw(self.game.snapshot().board());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    #[test]
    fn test_two_sequential_agents_x_wins() {
        // Deterministic interleaving: only the turn holder can pass the
        // wait predicate, so successes strictly alternate and each sweep
        // lands on the first empty cell. X collects (0,0), (0,2), (1,1)
        // and completes the anti-diagonal at (2,0).
        let game = Arc::new(Game::new());
        let a = Agent::new(
            Arc::clone(&game),
            Mark::X,
            Policy::Sequential,
            Duration::from_millis(1),
        );
        let b = Agent::new(
            Arc::clone(&game),
            Mark::O,
            Policy::Sequential,
            Duration::from_millis(1),
        );
        let ta = thread::spawn(move || a.run());
        let tb = thread::spawn(move || b.run());
        ta.join().unwrap();
        tb.join().unwrap();

        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_sequential_vs_random_terminates() {
        let game = Arc::new(Game::new());
        let a = Agent::new(
            Arc::clone(&game),
            Mark::X,
            Policy::Sequential,
            Duration::from_millis(1),
        );
        let b = Agent::new(
            Arc::clone(&game),
            Mark::O,
            Policy::Random,
            Duration::from_millis(1),
        );
        let ta = thread::spawn(move || a.run());
        let tb = thread::spawn(move || b.run());
        ta.join().unwrap();
        tb.join().unwrap();

        assert!(game.is_finished());
        assert_ne!(game.outcome(), Outcome::Pending);
    }
}
