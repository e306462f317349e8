//! Mark balance invariant: X and O counts differ by at most 1.

use super::Invariant;
use crate::engine::Engine;
use crate::types::{Player, Square};
use tracing::warn;

/// Invariant: Strict alternation keeps the mark counts balanced.
///
/// At any point, the number of X marks and O marks on the board differ
/// by at most 1.
pub struct MarkBalanceInvariant;

fn count(engine: &Engine, player: Player) -> usize {
    engine
        .board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x_count = count(engine, Player::X);
        let o_count = count(engine, Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most 1"
    }
}
