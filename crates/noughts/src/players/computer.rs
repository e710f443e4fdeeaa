//! Heuristic computer player.

use super::Participant;
use crate::console::Console;
use crate::display::describe;
use anyhow::Result;
use noughts_core::{Move, Player, Round};
use rand::RngCore;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer player backed by the one-ply strategy.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    thinking_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses for `thinking_delay` before
    /// each move.
    pub fn new(thinking_delay: Duration) -> Self {
        Self { thinking_delay }
    }
}

impl Participant for ComputerPlayer {
    #[instrument(skip_all, fields(player = %player))]
    fn take_turn(
        &mut self,
        player: &Player,
        round: &mut Round,
        console: &mut Console<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Move>> {
        console.say(&format!("{} is thinking...", player.name()))?;

        // Pure UX pause; the board is not read until it ends.
        std::thread::sleep(self.thinking_delay);

        let mov = round.play_computer(rng)?;
        debug!(%mov, "Computer moved");
        console.say(&format!(
            "{} takes position {}.",
            player.name(),
            describe(mov.position)
        ))?;
        Ok(Some(mov))
    }

    fn kind(&self) -> &'static str {
        "computer"
    }
}
