//! Participants: a display name paired with a symbol.

use crate::types::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// The symbol this player places. Fixed for the whole session.
    #[getter(skip)]
    symbol: Symbol,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// The symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Error building a [`Players`] pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayersError {
    /// Both players were given the same symbol.
    #[display("Both players cannot play {}", _0)]
    SameSymbol(#[error(not(source))] Symbol),
}

/// The two players of a game, one holding X and the other O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Pairs two players.
    ///
    /// # Errors
    ///
    /// Returns [`PlayersError::SameSymbol`] unless the symbols are complementary.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, PlayersError> {
        if first.symbol == second.symbol {
            return Err(PlayersError::SameSymbol(first.symbol));
        }
        Ok(Self { first, second })
    }

    /// Player 1.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// Player 2.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The player placing `symbol`.
    pub fn holding(&self, symbol: Symbol) -> &Player {
        if self.first.symbol == symbol {
            &self.first
        } else {
            &self.second
        }
    }
}
