//! Command-line interface for noughts.

use crate::mode::GameMode;
use clap::Parser;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode. Asked interactively when omitted.
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's tie-breaking and random openers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer "thinking" pause in milliseconds (overrides config)
    #[arg(long)]
    pub thinking_ms: Option<u64>,

    /// Disable coloured board output (overrides config)
    #[arg(long)]
    pub no_color: bool,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.mode, None);
        assert!(!cli.no_color);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "noughts",
            "--mode",
            "pvc",
            "--seed",
            "7",
            "--thinking-ms",
            "0",
            "--no-color",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(GameMode::PlayerVsComputer));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.thinking_ms, Some(0));
        assert!(cli.no_color);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["noughts", "--mode", "online"]).is_err());
    }
}
