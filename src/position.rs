//! Named cells of the 3x3 grid.
//!
//! Every move is expressed as a `Position` rather than a raw index, so
//! the win-line table and the board agree on cell geometry by construction.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Cells are numbered 1-9 in row-major order from the top-left, the
/// layout printed on the board itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Converts position to board index (0-8, row-major).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// The 1-based cell number (1-9) shown on the rendered board.
    pub fn cell_number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates position from a 1-based cell number (1-9).
    pub fn from_cell_number(cell: u8) -> Option<Self> {
        if (1..=9).contains(&cell) {
            Self::from_index(cell as usize - 1)
        } else {
            None
        }
    }

    /// Creates position from 1-based (row, col) coordinates in [1,3].
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            Self::from_index((row as usize - 1) * 3 + (col as usize - 1))
        } else {
            None
        }
    }

    /// The 1-based row of this position.
    pub fn row(self) -> u8 {
        self.index() as u8 / 3 + 1
    }

    /// The 1-based column of this position.
    pub fn col(self) -> u8 {
        self.index() as u8 % 3 + 1
    }

    /// Returns the positions of all empty squares on the board.
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
