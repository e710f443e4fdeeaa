//! Noughts - terminal tic-tac-toe
//!
//! Command-line front end for [`noughts_core`]: two humans sharing a
//! keyboard, or one human against the heuristic computer player.
//!
//! # Architecture
//!
//! - **Session**: setup prompts, rounds, score tally and replay
//! - **Players**: human (line input) and computer (strategy + thinking pause)
//! - **Display**: board rendering with optional colour
//! - **Config**: TOML settings overridden by command-line flags
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Console, SessionOptions, run};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let score = run(&mut console, SessionOptions::default(), &mut rng)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod display;
mod mode;
mod players;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::Console;
pub use display::{BoardStyle, describe, render_board};
pub use mode::GameMode;
pub use players::{ComputerPlayer, HumanPlayer, Participant};
pub use session::{COMPUTER_NAME, Scoreboard, SessionOptions, run};
