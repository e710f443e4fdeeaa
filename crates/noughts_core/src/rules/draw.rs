//! Draw detection logic for tic-tac-toe.
//!
//! A round is drawn as soon as no line can still be completed, which can
//! happen before the board fills up.

use super::LINES;
use crate::types::{Board, Symbol};
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| !cell.is_empty())
}

/// Checks if no line can still be completed by either symbol.
///
/// A line is live while it has an empty cell and does not yet hold both
/// symbols. A full board with a completed line also reports `true`, so check
/// [`has_won`](super::has_won) for the mover first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    !LINES.iter().any(|line| {
        let marks: Vec<Symbol> = line.iter().filter_map(|&pos| board.get(pos).symbol()).collect();
        let blocked = marks.contains(&Symbol::X) && marks.contains(&Symbol::O);
        marks.len() < 3 && !blocked
    })
}
