//! Game mode selection.

use strum::IntoEnumIterator;

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::EnumIter)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[value(name = "pvp")]
    PlayerVsPlayer,
    /// Human vs the heuristic computer player.
    #[default]
    #[value(name = "pvc")]
    PlayerVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer",
        }
    }

    /// The numbered menu line, e.g. `1) Player vs Player  2) Player vs Computer`.
    pub fn menu() -> String {
        GameMode::iter()
            .enumerate()
            .map(|(i, mode)| format!("{}) {}", i + 1, mode.name()))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Parses a menu answer.
    pub fn from_menu(input: &str) -> Option<Self> {
        let choice = input.trim().parse::<usize>().ok()?;
        GameMode::iter().nth(choice.checked_sub(1)?)
    }
}
