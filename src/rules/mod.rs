//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the synchronized game and the tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;
