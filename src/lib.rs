//! Tic-tac-toe game engine.
//!
//! One canonical engine behind a small API: board representation, move
//! validation, win/draw detection, and the turn-alternation state machine.
//! Win detection walks an explicit table of the 8 winning lines rather
//! than deriving indices arithmetically.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, GameStatus, Player};
//!
//! let mut game = Engine::new(Player::X);
//! game.apply_move(2, 2)?; // X takes the center
//! game.apply_move(1, 2)?; // O answers
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::Engine;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
