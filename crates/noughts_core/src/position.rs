//! Board positions, numbered 1-9 left-to-right, top-to-bottom.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Players refer to positions by number:
///
/// ```text
/// 1 | 2 | 3
/// --+---+--
/// 4 | 5 | 6
/// --+---+--
/// 7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 1)
    TopLeft,
    /// Top-center (position 2)
    TopCenter,
    /// Top-right (position 3)
    TopRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Bottom-left (position 7)
    BottomLeft,
    /// Bottom-center (position 8)
    BottomCenter,
    /// Bottom-right (position 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
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

    /// The four corners (1, 3, 7, 9).
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge midpoints (2, 4, 6, 8).
    pub const SIDES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Creates a position from its player-facing number (1-9).
    ///
    /// Out-of-range numbers are rejected, never clamped.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Player-facing number (1-9).
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Zero-based row: `(number - 1) / 3`.
    pub fn row(self) -> usize {
        self as usize / 3
    }

    /// Zero-based column: `(number - 1) % 3`.
    pub fn col(self) -> usize {
        self as usize % 3
    }

    /// Checks if this is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Checks if this is one of the four edge midpoints.
    pub fn is_side(self) -> bool {
        Self::SIDES.contains(&self)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Lists the empty positions on the board in ascending order.
///
/// Empty when the board is full.
#[instrument(skip(board))]
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::iter().filter(|&pos| board.is_empty(pos)).collect()
}
