//! Moves and the errors that reject them.

use crate::position::Position;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol that was placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position)
    }
}

/// Error that rejects a move. None of these end the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The position number is outside 1-9.
    #[display("Position {} is out of range (must be 1-9)", _0)]
    InvalidPosition(#[error(not(source))] i64),

    /// The cell at the position already holds a mark.
    #[display("Position {} is already taken", _0)]
    OccupiedCell(#[error(not(source))] Position),

    /// The round already ended in a win or draw.
    #[display("The round is already over")]
    RoundOver,
}
