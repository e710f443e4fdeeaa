//! One-ply heuristic computer player.
//!
//! Priority order: win now, block the opponent, take the center, take a
//! random open corner, take a random open side. Winning and blocking are
//! found by simulating each open position on a scratch copy of the board,
//! scanning in ascending position order.

use crate::position::{Position, available_moves};
use crate::rules::has_won;
use crate::types::{Board, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which heuristic tier produced the chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tier {
    /// Completes one of our lines.
    Win,
    /// Occupies the cell that would complete an opponent line.
    Block,
    /// Takes the center.
    Center,
    /// Takes an open corner.
    Corner,
    /// Takes an open side.
    Side,
}

/// Picks a move without touching `board`.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R>(
    board: &Board,
    own: Symbol,
    opponent: Symbol,
    rng: &mut R,
) -> Option<(Position, Tier)>
where
    R: Rng + ?Sized,
{
    let open = available_moves(board);

    if let Some(pos) = completing_move(board, &open, own) {
        return Some((pos, Tier::Win));
    }
    if let Some(pos) = completing_move(board, &open, opponent) {
        return Some((pos, Tier::Block));
    }
    if open.contains(&Position::Center) {
        return Some((Position::Center, Tier::Center));
    }
    if let Some(pos) = sample_open(&open, Position::is_corner, rng) {
        return Some((pos, Tier::Corner));
    }
    sample_open(&open, Position::is_side, rng).map(|pos| (pos, Tier::Side))
}

/// Picks a move for `own` and commits it to `board`.
///
/// The board is only written once, with the chosen move. Returns the
/// committed position, or `None` with the board untouched if it is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R>(
    board: &mut Board,
    own: Symbol,
    opponent: Symbol,
    rng: &mut R,
) -> Option<Position>
where
    R: Rng + ?Sized,
{
    let (pos, tier) = select_move(board, own, opponent, rng)?;
    // Selection only returns open positions.
    board.place_at(pos, own).ok()?;
    debug!(position = pos.number(), %tier, "Computer committed move");
    Some(pos)
}

/// First open position where `symbol` would complete a line.
fn completing_move(board: &Board, open: &[Position], symbol: Symbol) -> Option<Position> {
    open.iter().copied().find(|&pos| {
        let mut scratch = board.clone();
        scratch.place_at(pos, symbol).is_ok() && has_won(&scratch, symbol)
    })
}

/// Uniform pick among the open positions accepted by `kind`.
fn sample_open<R>(open: &[Position], kind: fn(Position) -> bool, rng: &mut R) -> Option<Position>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Position> = open.iter().copied().filter(|&pos| kind(pos)).collect();
    candidates.choose(rng).copied()
}
