//! Human player that types position numbers.

use super::Participant;
use crate::console::Console;
use anyhow::{Result, bail};
use noughts_core::{Move, MoveError, Player, Round};
use rand::RngCore;
use std::num::IntErrorKind;
use tracing::{info, instrument, warn};

/// Human player using line input.
#[derive(Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self
    }
}

impl Participant for HumanPlayer {
    #[instrument(skip_all, fields(player = %player))]
    fn take_turn(
        &mut self,
        player: &Player,
        round: &mut Round,
        console: &mut Console<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<Option<Move>> {
        let question = format!("{}, enter a position (1-9): ", player.name());
        loop {
            let Some(answer) = console.ask(&question)? else {
                return Ok(None);
            };

            // Only well-formed numbers reach the engine; it owns range checks.
            let Some(number) = parse_number(&answer) else {
                console.say("Please enter a number from 1 to 9.")?;
                continue;
            };

            match round.play(number) {
                Ok(mov) => {
                    info!(%mov, "Human moved");
                    return Ok(Some(mov));
                }
                Err(MoveError::RoundOver) => bail!("Asked for a move after the round ended"),
                Err(err) => {
                    warn!(error = %err, number, "Move rejected");
                    console.say(&format!("{}. Try again.", err))?;
                }
            }
        }
    }

    fn kind(&self) -> &'static str {
        "human"
    }
}

/// Parses a signed integer, saturating values beyond `i64`.
///
/// Returns `None` for anything that is not an integer at all.
fn parse_number(answer: &str) -> Option<i64> {
    match answer.parse::<i64>() {
        Ok(number) => Some(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
