//! Interactive console front end: renders the board and collects moves.
//!
//! All input parsing lives here; the engine only ever sees numeric
//! coordinates or cell numbers. Every rejected or malformed entry is
//! re-prompted without consuming a turn.

use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe::{Engine, Player};
use tracing::debug;

/// A move as entered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// A single cell number, 1-9.
    Cell(u8),
    /// 1-based (row, col) coordinates.
    Coords(u8, u8),
}

/// Console session over generic input/output streams.
///
/// Generic so tests can drive a full session from in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs game sessions until the players stop or input ends.
    ///
    /// `forced_first` pins the opening mark; otherwise player 1 picks a
    /// mark and the first turn is decided by `rng`.
    pub fn run<G: Rng>(&mut self, forced_first: Option<Player>, rng: &mut G) -> Result<()> {
        loop {
            let Some(first) = self.pick_first_mark(forced_first, rng)? else {
                return Ok(());
            };
            writeln!(self.output, "{first} goes first")?;

            let mut engine = Engine::new(first);
            writeln!(self.output, "{}", engine.board().display())?;

            if !self.play_one_game(&mut engine)? {
                return Ok(());
            }
            if !self.play_again()? {
                return Ok(());
            }
        }
    }

    /// Plays a single game to a terminal status.
    ///
    /// Returns false if input ended before the game did.
    fn play_one_game(&mut self, engine: &mut Engine) -> Result<bool> {
        loop {
            let player = engine.to_move();
            let Some(entry) = self.read_move(player)? else {
                return Ok(false);
            };

            let result = match entry {
                MoveInput::Cell(cell) => engine.apply_cell(cell),
                MoveInput::Coords(row, col) => engine.apply_move(row, col),
            };

            match result {
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
                Ok(status) => {
                    writeln!(self.output, "{}", engine.board().display())?;
                    if status.is_terminal() {
                        writeln!(self.output, "{status}")?;
                        return Ok(true);
                    }
                }
            }
        }
    }

    /// Determines the opening mark for a new game.
    fn pick_first_mark<G: Rng>(
        &mut self,
        forced: Option<Player>,
        rng: &mut G,
    ) -> Result<Option<Player>> {
        if let Some(mark) = forced {
            return Ok(Some(mark));
        }

        let Some(player1) = self.choose_mark()? else {
            return Ok(None);
        };
        writeln!(self.output, "Player 1 is {player1}")?;

        // The marks are fixed; only who opens is random.
        let first = Player::random_first(rng);
        debug!(%first, "first turn selected");
        Ok(Some(first))
    }

    /// Prompts player 1 to choose a mark, re-prompting until valid.
    fn choose_mark(&mut self) -> Result<Option<Player>> {
        loop {
            let Some(line) = self.prompt("Player 1, choose X or O: ")? else {
                return Ok(None);
            };
            match line.trim().to_uppercase().as_str() {
                "X" => return Ok(Some(Player::X)),
                "O" => return Ok(Some(Player::O)),
                _ => writeln!(self.output, "Invalid marker choice, please choose X or O")?,
            }
        }
    }

    /// Reads one move, re-prompting on malformed entries.
    ///
    /// Accepts either a single cell number (1-9) or two space-separated
    /// 1-based coordinates (`row col`). Range and occupancy checks are
    /// the engine's job; only parsing happens here.
    fn read_move(&mut self, player: Player) -> Result<Option<MoveInput>> {
        loop {
            let Some(line) = self.prompt(&format!("{player}'s turn, enter a move: "))? else {
                return Ok(None);
            };
            match parse_move(&line) {
                Some(entry) => return Ok(Some(entry)),
                None => writeln!(
                    self.output,
                    "Enter a cell number 1-9, or two coordinates 1-3 separated by a space"
                )?,
            }
        }
    }

    /// Asks whether to start another game.
    fn play_again(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.prompt("Play again? (y/n) ")? else {
                return Ok(false);
            };
            match line.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }

    /// Writes a prompt and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Parses a raw input line into a move entry.
fn parse_move(line: &str) -> Option<MoveInput> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [cell] => cell.parse().ok().map(MoveInput::Cell),
        [row, col] => {
            let row = row.parse().ok()?;
            let col = col.parse().ok()?;
            Some(MoveInput::Coords(row, col))
        }
        _ => None,
    }
}
