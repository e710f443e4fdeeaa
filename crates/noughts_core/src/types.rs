//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark a player puts on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// Crosses (always moves first against the computer).
    X,
    /// Noughts.
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Parses `x`/`o` in either case, ignoring surrounding whitespace.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "x" | "X" => Some(Symbol::X),
            "o" | "O" => Some(Symbol::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Occupied(symbol)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from empty to occupied: [`Board::place`] and
/// [`Board::place_at`] are the only ways to write to a board once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    rows: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows, top row first.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.rows[pos.row()][pos.col()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.rows
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Places `symbol` at the raw position number supplied by a player (1-9).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] if `number` is outside 1-9.
    /// - [`MoveError::OccupiedCell`] if the cell already holds a mark.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, number: i64, symbol: Symbol) -> Result<Position, MoveError> {
        let pos = usize::try_from(number)
            .ok()
            .and_then(Position::from_number)
            .ok_or(MoveError::InvalidPosition(number))?;
        self.place_at(pos, symbol)?;
        Ok(pos)
    }

    /// Places `symbol` at an already validated position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OccupiedCell`] if the cell already holds a mark.
    pub fn place_at(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        let cell = &mut self.rows[pos.row()][pos.col()];
        if !cell.is_empty() {
            return Err(MoveError::OccupiedCell(pos));
        }
        *cell = Cell::from(symbol);
        Ok(())
    }
}

/// Creates a board with every cell empty.
pub fn create_empty_board() -> Board {
    Board::new()
}
