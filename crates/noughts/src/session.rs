//! Interactive session: setup, rounds, score and replay.

use crate::console::Console;
use crate::display::{BoardStyle, render_board};
use crate::mode::GameMode;
use crate::players::{ComputerPlayer, HumanPlayer, Participant};
use anyhow::{Context, Result};
use derive_getters::Getters;
use noughts_core::{Player, Players, Round, RoundOutcome, StartingPlayer, Symbol, next_player};
use rand::RngCore;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Name used for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Settings the session needs from the command line and config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Mode chosen up front; asked interactively when `None`.
    pub mode: Option<GameMode>,
    /// Pause before each computer move.
    pub thinking_delay: Duration,
    /// Board rendering style.
    pub style: BoardStyle,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            mode: None,
            thinking_delay: Duration::from_millis(1500),
            style: BoardStyle { color: true },
        }
    }
}

/// Wins per player and draws across the rounds of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Player 1's name.
    first_name: String,
    /// Player 2's name.
    second_name: String,
    /// Rounds won by player 1.
    first_wins: u32,
    /// Rounds won by player 2.
    second_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty tally for `players`.
    pub fn new(players: &Players) -> Self {
        Self {
            first_name: players.first().name().clone(),
            second_name: players.second().name().clone(),
            ..Self::default()
        }
    }

    /// Adds one finished round.
    pub fn record(&mut self, outcome: RoundOutcome, players: &Players) {
        match outcome.winner() {
            Some(symbol) if symbol == players.first().symbol() => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }

    /// One-line summary, e.g. `Score: Ann 2, Bo 1, draws 0`.
    pub fn summary(&self) -> String {
        format!(
            "Score: {} {}, {} {}, draws {}",
            self.first_name, self.first_wins, self.second_name, self.second_wins, self.draws
        )
    }
}

/// The two players, who controls each, and the opening rule.
struct Lineup {
    players: Players,
    /// Controllers for player 1 and player 2, in that order.
    controllers: [Box<dyn Participant>; 2],
    starting: StartingPlayer,
}

impl Lineup {
    fn seat(&self, symbol: Symbol) -> usize {
        if self.players.first().symbol() == symbol {
            0
        } else {
            1
        }
    }
}

/// Runs a whole session until the players decline a replay or input ends.
///
/// Returns `None` if input ended before both players were set up.
#[instrument(skip_all, fields(mode = ?options.mode))]
pub fn run(
    console: &mut Console<'_>,
    options: SessionOptions,
    rng: &mut dyn RngCore,
) -> Result<Option<Scoreboard>> {
    console.say("Welcome to Tic-Tac-Toe!")?;

    let mode = match options.mode {
        Some(mode) => mode,
        None => {
            console.say(&GameMode::menu())?;
            match console.ask_until("Choose a mode: ", "Please enter 1 or 2.", GameMode::from_menu)? {
                Some(mode) => mode,
                None => return Ok(None),
            }
        }
    };
    info!(mode = mode.name(), "Mode selected");

    let lineup = match mode {
        GameMode::PlayerVsPlayer => setup_pvp(console)?,
        GameMode::PlayerVsComputer => setup_pvc(console, options.thinking_delay)?,
    };
    let Some(mut lineup) = lineup else {
        return Ok(None);
    };

    // The rule is applied once; every round of the session shares the opener.
    let opener = lineup.starting.resolve(&lineup.players, rng).symbol();
    info!(starting = ?lineup.starting, %opener, "Opener chosen for the session");

    let mut scoreboard = Scoreboard::new(&lineup.players);
    loop {
        let Some(outcome) = play_round(console, &mut lineup, opener, options.style, rng)? else {
            break;
        };
        scoreboard.record(outcome, &lineup.players);
        console.say(&scoreboard.summary())?;

        let again = console.ask_until("Play again? (y/n): ", "Please answer y or n.", parse_yes_no)?;
        if again != Some(true) {
            break;
        }
    }

    info!(rounds = scoreboard.rounds(), "Session finished");
    console.say(&format!("Thanks for playing! Final {}", scoreboard.summary()))?;
    Ok(Some(scoreboard))
}

fn setup_pvp(console: &mut Console<'_>) -> Result<Option<Lineup>> {
    let Some(first_name) = ask_name(console, "Player 1 name: ", "Player 1")? else {
        return Ok(None);
    };
    let Some(second_name) = ask_name(console, "Player 2 name: ", "Player 2")? else {
        return Ok(None);
    };
    let Some(symbol) = ask_symbol(console, &first_name)? else {
        return Ok(None);
    };

    let question = format!(
        "Who goes first? 1) {}  2) {}  r) random: ",
        first_name, second_name
    );
    let Some(starting) =
        console.ask_until(&question, "Please enter 1, 2 or r.", StartingPlayer::from_input)?
    else {
        return Ok(None);
    };

    let players = Players::new(
        Player::new(first_name, symbol),
        Player::new(second_name, symbol.opponent()),
    )
    .context("Failed to pair players")?;
    debug!(?starting, "Player vs player lineup ready");

    Ok(Some(Lineup {
        players,
        controllers: [Box::new(HumanPlayer::new()), Box::new(HumanPlayer::new())],
        starting,
    }))
}

fn setup_pvc(console: &mut Console<'_>, thinking_delay: Duration) -> Result<Option<Lineup>> {
    let Some(name) = ask_name(console, "Your name: ", "Player")? else {
        return Ok(None);
    };
    let Some(symbol) = ask_symbol(console, &name)? else {
        return Ok(None);
    };

    let players = Players::new(
        Player::new(name, symbol),
        Player::new(COMPUTER_NAME, symbol.opponent()),
    )
    .context("Failed to pair players")?;
    debug!(human = %players.first(), "Player vs computer lineup ready");

    Ok(Some(Lineup {
        players,
        controllers: [
            Box::new(HumanPlayer::new()),
            Box::new(ComputerPlayer::new(thinking_delay)),
        ],
        starting: StartingPlayer::Crosses,
    }))
}

fn ask_name(console: &mut Console<'_>, question: &str, default: &str) -> Result<Option<String>> {
    Ok(console.ask(question)?.map(|name| {
        if name.is_empty() {
            default.to_string()
        } else {
            name
        }
    }))
}

fn ask_symbol(console: &mut Console<'_>, name: &str) -> Result<Option<Symbol>> {
    console.ask_until(
        &format!("{}, choose X or O: ", name),
        "Please enter X or O.",
        Symbol::from_input,
    )
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Plays one round on a fresh board. Returns `None` if input ended mid-round.
#[instrument(skip(console, lineup, style, rng))]
fn play_round(
    console: &mut Console<'_>,
    lineup: &mut Lineup,
    opener: Symbol,
    style: BoardStyle,
    rng: &mut dyn RngCore,
) -> Result<Option<RoundOutcome>> {
    let mut current = lineup.players.holding(opener);
    console.say(&format!("{} goes first.", current.name()))?;
    let mut round = Round::new(opener);
    console.say(&render_board(round.board(), style))?;

    while !round.is_over() {
        debug_assert_eq!(round.to_move(), Some(current.symbol()));
        let seat = lineup.seat(current.symbol());
        let controller = &mut lineup.controllers[seat];
        console.say(&format!("{}'s turn.", current))?;
        debug!(kind = controller.kind(), player = %current, "Waiting for move");

        if controller.take_turn(current, &mut round, console, rng)?.is_none() {
            info!(moves = round.moves_played(), "Input ended mid-round");
            return Ok(None);
        }
        console.say(&render_board(round.board(), style))?;
        current = next_player(current.symbol(), &lineup.players);
    }

    let outcome = round
        .outcome()
        .context("Round stopped without an outcome")?;
    match outcome {
        RoundOutcome::Winner(symbol) => {
            console.say(&format!("{} wins!", lineup.players.holding(symbol).name()))?
        }
        RoundOutcome::Draw => console.say("It's a draw!")?,
    }
    info!(%outcome, moves = round.moves_played(), "Round finished");
    Ok(Some(outcome))
}
