//! History consistency invariant: the board is exactly its history.

use super::Invariant;
use crate::engine::Engine;
use crate::types::{Board, Square};
use tracing::warn;

/// Invariant: Replaying the history reproduces the board.
///
/// Every recorded move lands on a then-empty square (marks are never
/// overwritten), and the reconstructed board matches the current one.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                warn!(position = %mov.position, "history replays onto an occupied square");
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        let valid = reconstructed == *engine.board();
        if !valid {
            warn!("board does not match its move history");
        }
        valid
    }

    fn description() -> &'static str {
        "replaying the move history reproduces the board"
    }
}
