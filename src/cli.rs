//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, ValueEnum};
use tictactoe::Player;

/// Play tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with win/draw detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark that moves first. Chosen at random when omitted.
    #[arg(long, value_enum)]
    pub first: Option<FirstMark>,

    /// Seed for the random first-player selection.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Mark selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FirstMark {
    /// X moves first.
    X,
    /// O moves first.
    O,
}

impl From<FirstMark> for Player {
    fn from(mark: FirstMark) -> Self {
        match mark {
            FirstMark::X => Player::X,
            FirstMark::O => Player::O,
        }
    }
}
