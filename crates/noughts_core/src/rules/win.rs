//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::types::{Board, Cell, Symbol};
use tracing::instrument;

/// Checks if `symbol` holds all three cells of at least one line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    let mark = Cell::from(symbol);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}
