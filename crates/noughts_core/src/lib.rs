//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells, written only through `place`
//! - **Rules**: win and draw detection over the 8 lines
//! - **Turn**: who moves next and who opens a round
//! - **Round**: the per-round state machine
//! - **Strategy**: the one-ply heuristic computer player
//!
//! # Example
//!
//! ```
//! use noughts_core::{Round, RoundOutcome, Symbol};
//!
//! let mut round = Round::new(Symbol::X);
//! for number in [1, 4, 2, 5, 3] {
//!     round.play(number).unwrap();
//! }
//! assert_eq!(round.outcome(), Some(RoundOutcome::Winner(Symbol::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod player;
mod position;
mod round;
mod turn;
mod types;

pub mod rules;
pub mod strategy;

pub use action::{Move, MoveError};
pub use player::{Player, Players, PlayersError};
pub use position::{Position, available_moves};
pub use round::{Round, RoundOutcome, RoundState};
pub use rules::{has_won, is_draw, is_full};
pub use strategy::{Tier, choose_move, select_move};
pub use turn::{StartingPlayer, next_player};
pub use types::{Board, Cell, Symbol, create_empty_board};
