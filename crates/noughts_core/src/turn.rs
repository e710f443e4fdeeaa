//! Turn coordination between the two players.

use crate::player::{Player, Players};
use crate::types::Symbol;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Returns the player who moves after the holder of `current`.
///
/// `current` always belongs to one of the pair because [`Players`] can only
/// be built with complementary symbols.
#[instrument(skip(players))]
pub fn next_player(current: Symbol, players: &Players) -> &Player {
    players.holding(current.opponent())
}

/// Rule picking who opens each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Player 1 always opens.
    #[default]
    First,
    /// Player 2 always opens.
    Second,
    /// A fair coin picks the opener every round.
    Random,
    /// Whoever holds X opens (player-vs-computer).
    Crosses,
}

impl StartingPlayer {
    /// Parses the driver's `1` / `2` / `r` answer.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Self::First),
            "2" => Some(Self::Second),
            "r" | "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Applies the rule, drawing from `rng` only for [`StartingPlayer::Random`].
    #[instrument(skip(players, rng))]
    pub fn resolve<'a, R>(self, players: &'a Players, rng: &mut R) -> &'a Player
    where
        R: Rng + ?Sized,
    {
        let opener = match self {
            Self::First => players.first(),
            Self::Second => players.second(),
            Self::Random => {
                if rng.gen_bool(0.5) {
                    players.first()
                } else {
                    players.second()
                }
            }
            Self::Crosses => players.holding(Symbol::X),
        };
        debug!(opener = %opener, "Resolved starting player");
        opener
    }
}
