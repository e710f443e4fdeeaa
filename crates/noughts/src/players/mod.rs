//! Participant trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use noughts_core::{Move, Player, Round};
use rand::RngCore;

/// Something that can make moves for one side of the board.
pub trait Participant {
    /// Makes one move for `player`, who is the side to move in `round`.
    ///
    /// Returns `None` if the participant quit (input closed).
    fn take_turn(
        &mut self,
        player: &Player,
        round: &mut Round,
        console: &mut Console<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Move>>;

    /// Short label for logs.
    fn kind(&self) -> &'static str;
}
