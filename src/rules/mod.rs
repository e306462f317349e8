//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating game state. Rules are separated from
//! board storage so the engine and the tests query the same logic.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, mark_wins};
