//! Scripted end-to-end sessions over in-memory streams.

use noughts::{BoardStyle, Console, GameMode, Scoreboard, SessionOptions, run};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;
use std::time::Duration;

fn options(mode: Option<GameMode>) -> SessionOptions {
    SessionOptions {
        mode,
        thinking_delay: Duration::ZERO,
        style: BoardStyle { color: false },
    }
}

/// Runs a seeded session fed by raw `script` bytes; returns the score and everything printed.
fn play_seeded(mode: Option<GameMode>, script: &[u8], seed: u64) -> (Option<Scoreboard>, String) {
    let mut out = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let score = {
        let mut console = Console::new(Cursor::new(script.to_vec()), &mut out);
        run(&mut console, options(mode), &mut rng).unwrap()
    };
    (score, String::from_utf8(out).unwrap())
}

fn play(mode: Option<GameMode>, script: &str) -> (Option<Scoreboard>, String) {
    play_seeded(mode, script.as_bytes(), 42)
}

/// Names announced by each "<name> goes first." line, in order.
///
/// The announcement follows an unanswered prompt on the same line.
fn openers(out: &str) -> Vec<&str> {
    out.lines()
        .filter_map(|line| line.strip_suffix(" goes first."))
        .filter_map(|line| line.rsplit(": ").next())
        .collect()
}

#[test]
fn test_pvp_top_row_win() {
    // Mode, names, Ann's symbol, start rule, moves 1 4 2 5 3, decline replay.
    let (score, out) = play(None, "1\nAnn\nBo\nx\n1\n1\n4\n2\n5\n3\nn\n");
    let score = score.unwrap();

    assert!(out.contains("1) Player vs Player  2) Player vs Computer"));
    assert!(out.contains("Ann goes first."));
    assert!(out.contains("Ann (X)'s turn."));
    assert!(out.contains("Bo (O)'s turn."));
    assert!(out.contains("X | X | X\n--+---+--\nO | O | 6"));
    assert!(out.contains("Ann wins!"));
    assert!(out.contains("Thanks for playing! Final Score: Ann 1, Bo 0, draws 0"));
    assert_eq!(*score.first_wins(), 1);
    assert_eq!(score.rounds(), 1);
}

#[test]
fn test_default_names_and_second_opens() {
    let (score, out) = play(
        Some(GameMode::PlayerVsPlayer),
        "\n\no\n2\n1\n4\n2\n5\n3\nn\n",
    );
    let score = score.unwrap();

    // Player 2 holds X and opens, so X takes the top row.
    assert!(out.contains("Player 2 goes first."));
    assert!(out.contains("Player 2 wins!"));
    assert_eq!(score.first_name(), "Player 1");
    assert_eq!(*score.second_wins(), 1);
}

#[test]
fn test_bad_input_reprompts_without_losing_turn() {
    let (score, out) = play(
        Some(GameMode::PlayerVsPlayer),
        "Ann\nBo\nx\n1\nabc\n10\n1\n1\n4\n2\n5\n3\nn\n",
    );

    assert!(out.contains("Please enter a number from 1 to 9."));
    assert!(out.contains("Position 10 is out of range (must be 1-9). Try again."));
    assert!(out.contains("Position 1 is already taken. Try again."));
    assert!(out.contains("Ann wins!"));
    assert_eq!(*score.unwrap().first_wins(), 1);
}

#[test]
fn test_setup_reprompts() {
    let (score, out) = play(None, "3\n1\nAnn\nBo\nz\nx\nq\n1\n1\n4\n2\n5\n3\nn\n");

    assert!(out.contains("Please enter 1 or 2."));
    assert!(out.contains("Please enter X or O."));
    assert!(out.contains("Please enter 1, 2 or r."));
    assert!(score.is_some());
}

#[test]
fn test_replay_tallies_draw() {
    // Round 1: Ann wins the top row. Round 2: drawn after eight moves.
    let (score, out) = play(
        Some(GameMode::PlayerVsPlayer),
        "Ann\nBo\nx\n1\n1\n4\n2\n5\n3\nmaybe\ny\n1\n2\n3\n5\n4\n6\n8\n7\nno\n",
    );
    let score = score.unwrap();

    assert!(out.contains("Please answer y or n."));
    assert!(out.contains("It's a draw!"));
    assert!(out.contains("Score: Ann 1, Bo 0, draws 1"));
    assert_eq!(*score.first_wins(), 1);
    assert_eq!(*score.draws(), 1);
    assert_eq!(score.rounds(), 2);
}

#[test]
fn test_pvc_computer_blocks_then_wins() {
    // Human X: 1, computer takes center; human 2, computer blocks 3;
    // human 9, computer completes 3-5-7.
    let (score, out) = play(Some(GameMode::PlayerVsComputer), "\nx\n1\n2\n9\nn\n");
    let score = score.unwrap();

    assert!(out.contains("Player goes first."));
    assert!(out.contains("Computer is thinking..."));
    assert!(out.contains("Computer takes position 5 (center)."));
    assert!(out.contains("Computer takes position 3 (top-right)."));
    assert!(out.contains("Computer takes position 7 (bottom-left)."));
    assert!(out.contains("Computer wins!"));
    assert_eq!(score.second_name(), "Computer");
    assert_eq!(*score.second_wins(), 1);
}

#[test]
fn test_pvc_crosses_open_when_human_picks_o() {
    let (score, out) = play(Some(GameMode::PlayerVsComputer), "Ann\no\n");

    assert!(out.contains("Computer goes first."));
    assert!(out.contains("Computer takes position 5 (center)."));
    // Input ends on Ann's first prompt: the session closes gracefully.
    assert!(out.contains("Thanks for playing! Final Score: Ann 0, Computer 0, draws 0"));
    assert_eq!(score.unwrap().rounds(), 0);
}

#[test]
fn test_eof_during_setup() {
    let (score, out) = play(None, "1\nAnn\n");
    assert!(score.is_none());
    assert!(!out.contains("Thanks for playing!"));
}

#[test]
fn test_eof_at_replay_prompt_ends_session() {
    let (score, out) = play(
        Some(GameMode::PlayerVsPlayer),
        "Ann\nBo\nx\n1\n1\n4\n2\n5\n3\n",
    );
    assert!(out.ends_with("Thanks for playing! Final Score: Ann 1, Bo 0, draws 0\n"));
    assert_eq!(score.unwrap().rounds(), 1);
}

#[test]
fn test_undecodable_input_is_rejected_like_text() {
    let (score, out) = play_seeded(
        Some(GameMode::PlayerVsPlayer),
        b"Ann\nBo\nx\n1\n\xff\xfe\n1\n4\n2\n5\n3\nn\n",
        42,
    );

    assert!(out.contains("Please enter a number from 1 to 9."));
    assert!(out.contains("Ann wins!"));
    assert_eq!(*score.unwrap().first_wins(), 1);
}

#[test]
fn test_negative_and_huge_numbers_reach_range_check() {
    let (score, out) = play(
        Some(GameMode::PlayerVsPlayer),
        "Ann\nBo\nx\n1\n-1\n99999999999999999999\n1\n4\n2\n5\n3\nn\n",
    );

    assert!(out.contains("Position -1 is out of range (must be 1-9). Try again."));
    assert!(out.contains(&format!(
        "Position {} is out of range (must be 1-9). Try again.",
        i64::MAX
    )));
    assert!(!out.contains("Please enter a number from 1 to 9."));
    assert_eq!(*score.unwrap().first_wins(), 1);
}

#[test]
fn test_random_opener_is_kept_for_the_whole_session() {
    // Two rounds where whoever opens takes the top row.
    let script = b"Ann\nBo\nx\nr\n1\n4\n2\n5\n3\ny\n1\n4\n2\n5\n3\nn\n";
    let mut seen = std::collections::HashSet::new();

    for seed in 0..16 {
        let (score, out) = play_seeded(Some(GameMode::PlayerVsPlayer), script, seed);
        let score = score.unwrap();
        let openers = openers(&out);

        assert_eq!(openers.len(), 2, "seed {seed}");
        assert_eq!(openers[0], openers[1], "seed {seed}");
        assert_eq!(out.matches(&format!("{} wins!", openers[0])).count(), 2);
        assert_eq!(score.rounds(), 2);
        assert!(*score.first_wins() == 2 || *score.second_wins() == 2);
        seen.insert(openers[0].to_string());
    }

    // The coin is fair across sessions.
    assert_eq!(seen.len(), 2);
}
