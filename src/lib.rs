//! Gridlock - concurrent turn-based tic-tac-toe
//!
//! Two independently scheduled agents alternate moves on one shared 3×3
//! board. A single mutex over the whole game state plus a condition
//! variable form the turn-synchronization protocol: an agent blocks until
//! it holds the turn or the game is finished, and every successful move
//! broadcasts to all waiters so the losing side is released too.
//!
//! # Architecture
//!
//! - **Game**: the shared synchronized owner of board, turn, and outcome
//! - **Agent**: one OS thread per mark, driven by a selection policy
//! - **Config**: the registry of `{mark, policy}` players to spawn
//! - **Invariants**: checkable properties of every published state
//!
//! # Example
//!
//! ```no_run
//! use gridlock::{Agent, Game, Mark, Policy};
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! let game = Arc::new(Game::new());
//! let pause = Duration::from_millis(100);
//!
//! let x = Agent::new(Arc::clone(&game), Mark::X, Policy::Sequential, pause);
//! let o = Agent::new(Arc::clone(&game), Mark::O, Policy::Random, pause);
//!
//! let tx = thread::spawn(move || x.run());
//! let to = thread::spawn(move || o.run());
//! tx.join().unwrap();
//! to.join().unwrap();
//!
//! println!("{:?}", game.outcome());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent;
mod board;
mod config;
mod game;
mod invariants;
mod render;
mod rules;
mod types;

// Crate-level exports - Agents
pub use agent::{Agent, Policy};

// Crate-level exports - Board
pub use board::{Board, SIZE};

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, PlayerSpec};

// Crate-level exports - Synchronized game
pub use game::{Game, GameState};

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant,
};

// Crate-level exports - Rendering
pub use render::{Console, Render};

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw};

// Crate-level exports - Core types
pub use types::{Mark, Outcome, Square};
