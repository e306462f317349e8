//! The game engine: board, turn state, and the win/draw state machine.

use crate::action::{Move, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
///
/// The engine owns the board, the player to move, and the game status,
/// and is the only place that mutates them. Status transitions only from
/// `InProgress` to `Won` or `Draw`, immediately after an accepted move,
/// and never reverts except through [`Engine::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Engine {
    /// Starts a new game with an empty board and `first_mark` to move.
    #[instrument]
    pub fn new(first_mark: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_mark,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first_mark: Player) {
        *self = Self::new(first_mark);
    }

    /// Applies the current player's mark at 1-based (row, col) coordinates.
    ///
    /// Returns the status after the move. On rejection the board, turn,
    /// and status are left untouched and the caller should re-prompt.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if row or col is outside [1,3].
    /// - [`MoveError::CellOccupied`] if the target cell is already marked.
    /// - [`MoveError::GameOver`] if the game has already ended.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<GameStatus, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfRange)?;
        self.place(pos)
    }

    /// Applies the current player's mark at a 1-based cell number (1-9).
    ///
    /// Cell numbers follow the row-major layout rendered on the board,
    /// with 5 as the center.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::apply_move`], with [`MoveError::OutOfRange`]
    /// for cell numbers outside [1,9].
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_cell(&mut self, cell: u8) -> Result<GameStatus, MoveError> {
        let pos = Position::from_cell_number(cell).ok_or(MoveError::OutOfRange)?;
        self.place(pos)
    }

    /// Places the current player's mark at a validated position.
    fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mover = self.to_move;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(Move::new(mover, pos));
        debug!(%mover, %pos, "mark placed");

        // Evaluate in order: mover's win, then full board, else continue.
        if rules::mark_wins(&self.board, mover) {
            self.status = GameStatus::Won(mover);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mover.opponent();
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after move"
        );

        Ok(self.status)
    }

    /// True iff `mark` occupies all three cells of some winning line.
    pub fn check_winner(&self, mark: Player) -> bool {
        rules::mark_wins(&self.board, mark)
    }

    /// True iff no empty cell remains and no mark has won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game ends this stays at the mark that moved last.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open for a move.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_cells(&self.board)
    }

    /// Replays a recorded game from an empty board.
    ///
    /// Positions are applied in recorded order, alternating from
    /// `first_mark`; stops early at a terminal status.
    ///
    /// # Errors
    ///
    /// Returns the first rejection if the transcript contains an
    /// illegal move.
    #[instrument]
    pub fn replay(first_mark: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new(first_mark);
        for mov in moves {
            if engine.place(mov.position)?.is_terminal() {
                break;
            }
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_in_progress() {
        let engine = Engine::new(Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.to_move(), Player::X);
        assert!(engine.history().is_empty());
        assert_eq!(engine.open_cells().len(), 9);
    }

    #[test]
    fn test_first_mark_is_respected() {
        let engine = Engine::new(Player::O);
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_accepted_move_switches_player() {
        let mut engine = Engine::new(Player::X);
        let status = engine.apply_move(2, 2).expect("legal move");
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut engine = Engine::new(Player::X);
        for (row, col) in [(0, 1), (4, 1), (1, 0), (1, 4), (0, 0), (9, 9)] {
            assert_eq!(engine.apply_move(row, col), Err(MoveError::OutOfRange));
        }
        assert_eq!(engine.to_move(), Player::X);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_out_of_range_cell_number_rejected() {
        let mut engine = Engine::new(Player::X);
        assert_eq!(engine.apply_cell(0), Err(MoveError::OutOfRange));
        assert_eq!(engine.apply_cell(10), Err(MoveError::OutOfRange));
    }

    #[test]
    fn test_occupied_cell_rejected_without_side_effects() {
        let mut engine = Engine::new(Player::X);
        engine.apply_move(1, 1).expect("legal move");
        let before = engine.clone();

        let result = engine.apply_move(1, 1);
        assert_eq!(result, Err(MoveError::CellOccupied(Position::TopLeft)));
        assert_eq!(engine, before);
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_diagonal_win_scenario() {
        // X: (2,2) (1,1) (3,3); O: (1,2) (3,1)
        let mut engine = Engine::new(Player::X);
        engine.apply_move(2, 2).unwrap();
        engine.apply_move(1, 2).unwrap();
        engine.apply_move(1, 1).unwrap();
        engine.apply_move(3, 1).unwrap();
        let status = engine.apply_move(3, 3).unwrap();

        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(engine.check_winner(Player::X));
        assert!(!engine.check_winner(Player::O));
        assert!(!engine.is_draw());
    }

    #[test]
    fn test_draw_scenario() {
        // X: (1,1) (1,2) (2,1) (2,3) (3,2); O: (1,3) (2,2) (3,1) (3,3)
        let mut engine = Engine::new(Player::X);
        let moves = [
            (1, 1),
            (1, 3),
            (1, 2),
            (2, 2),
            (2, 1),
            (3, 1),
            (2, 3),
            (3, 3),
            (3, 2),
        ];
        let mut status = GameStatus::InProgress;
        for (row, col) in moves {
            status = engine.apply_move(row, col).expect("legal move");
        }

        assert_eq!(status, GameStatus::Draw);
        assert!(engine.is_draw());
        assert!(!engine.check_winner(Player::X));
        assert!(!engine.check_winner(Player::O));
    }

    #[test]
    fn test_no_moves_after_terminal_status() {
        let mut engine = Engine::new(Player::X);
        engine.apply_cell(1).unwrap();
        engine.apply_cell(4).unwrap();
        engine.apply_cell(2).unwrap();
        engine.apply_cell(5).unwrap();
        let status = engine.apply_cell(3).unwrap(); // X wins top row

        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(engine.apply_cell(9), Err(MoveError::GameOver));
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_reset_returns_to_fresh_game() {
        let mut engine = Engine::new(Player::X);
        engine.apply_cell(5).unwrap();
        engine.reset(Player::O);

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.to_move(), Player::O);
        assert!(engine.history().is_empty());
        assert_eq!(engine.open_cells().len(), 9);
    }

    #[test]
    fn test_numpad_center_is_cell_five() {
        let mut engine = Engine::new(Player::X);
        engine.apply_cell(5).unwrap();
        assert!(!engine.board().is_empty(Position::Center));
    }

    #[test]
    fn test_replay_reproduces_game() {
        let mut engine = Engine::new(Player::X);
        engine.apply_cell(5).unwrap();
        engine.apply_cell(1).unwrap();
        engine.apply_cell(9).unwrap();

        let replayed =
            Engine::replay(Player::X, engine.history()).expect("transcript is legal");
        assert_eq!(replayed, engine);
    }

    #[test]
    fn test_replay_rejects_illegal_transcript() {
        let moves = [
            Move::new(Player::X, Position::Center),
            Move::new(Player::O, Position::Center),
        ];
        assert_eq!(
            Engine::replay(Player::X, &moves),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_mark_counts_stay_balanced() {
        let mut engine = Engine::new(Player::O);
        for cell in [5, 1, 9, 3, 2] {
            let counts = count_marks(&engine);
            assert!(counts.0.abs_diff(counts.1) <= 1);
            if engine.status().is_terminal() {
                break;
            }
            engine.apply_cell(cell).unwrap();
        }
        let counts = count_marks(&engine);
        assert!(counts.0.abs_diff(counts.1) <= 1);
    }

    fn count_marks(engine: &Engine) -> (usize, usize) {
        let xs = engine
            .board()
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(Player::X))
            .count();
        let os = engine
            .board()
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(Player::O))
            .count();
        (xs, os)
    }
}
