//! Stateless board rendering for the terminal.

use crossterm::style::Stylize;
use noughts_core::{Board, Cell, Position, Symbol};

/// How to draw cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    /// Red X, green O and dim position numbers when true.
    pub color: bool,
}

/// Renders the board, showing the position number in each empty cell.
///
/// ```text
/// X | 2 | 3
/// --+---+--
/// 4 | O | 6
/// --+---+--
/// 7 | 8 | 9
/// ```
pub fn render_board(board: &Board, style: BoardStyle) -> String {
    board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| render_cell(cell, row * 3 + col + 1, style))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n--+---+--\n")
}

fn render_cell(cell: Cell, number: usize, style: BoardStyle) -> String {
    match (cell, style.color) {
        (Cell::Occupied(Symbol::X), true) => "X".red().to_string(),
        (Cell::Occupied(Symbol::O), true) => "O".green().to_string(),
        (Cell::Empty, true) => number.to_string().dark_grey().to_string(),
        (Cell::Occupied(symbol), false) => symbol.to_string(),
        (Cell::Empty, false) => number.to_string(),
    }
}

/// Short description of a cell, used in move announcements.
pub fn describe(position: Position) -> String {
    format!("{} ({})", position.number(), position.label().to_lowercase())
}
