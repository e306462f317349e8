//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated,
//! serialized for replay, and logged for debugging.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Rejection reasons for a move.
///
/// All variants are recoverable: the engine leaves board, turn, and
/// status untouched, and the caller re-prompts without consuming a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside [1,3], or cell number outside [1,9].
    #[display("coordinates must be 1-3 (or a cell number 1-9)")]
    OutOfRange,

    /// The square at the position is already occupied.
    #[display("the {_0} cell already has a marker")]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
