//! A single round: empty board to win or draw.
//!
//! ```text
//! AwaitingMove(s) --move--> Won(s) | Draw | AwaitingMove(s.opponent())
//! ```
//!
//! Outcomes are only evaluated once [`MIN_MOVES_FOR_OUTCOME`] marks are on
//! the board, and always against the symbol that just moved.

use crate::action::{Move, MoveError};
use crate::rules::{MIN_MOVES_FOR_OUTCOME, has_won, is_draw};
use crate::strategy;
use crate::types::{Board, Symbol};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the holder of this symbol to move.
    AwaitingMove(Symbol),
    /// This symbol completed a line.
    Won(Symbol),
    /// No line can be completed any more.
    Draw,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// This symbol won.
    Winner(Symbol),
    /// The round was drawn.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            RoundOutcome::Winner(symbol) => Some(*symbol),
            RoundOutcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Winner(symbol) => write!(f, "{} wins", symbol),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One round of play, owning its board.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    state: RoundState,
    moves_played: usize,
}

impl Round {
    /// Starts a round on a fresh board with `opener` to move.
    #[instrument]
    pub fn new(opener: Symbol) -> Self {
        Self {
            board: Board::new(),
            state: RoundState::AwaitingMove(opener),
            moves_played: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Number of marks placed this round.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The symbol to move, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Symbol> {
        match self.state {
            RoundState::AwaitingMove(symbol) => Some(symbol),
            RoundState::Won(_) | RoundState::Draw => None,
        }
    }

    /// Checks if the round has ended.
    pub fn is_over(&self) -> bool {
        self.to_move().is_none()
    }

    /// The outcome, once the round has ended.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::AwaitingMove(_) => None,
            RoundState::Won(symbol) => Some(RoundOutcome::Winner(symbol)),
            RoundState::Draw => Some(RoundOutcome::Draw),
        }
    }

    /// Plays the raw position number a human entered for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] or [`MoveError::OccupiedCell`] from the
    /// board, or [`MoveError::RoundOver`]. The round is unchanged on error.
    #[instrument(skip(self), fields(moves = self.moves_played))]
    pub fn play(&mut self, number: i64) -> Result<Move, MoveError> {
        let symbol = self.to_move().ok_or(MoveError::RoundOver)?;
        let position = self.board.place(number, symbol)?;
        Ok(self.record(Move::new(symbol, position)))
    }

    /// Lets the computer heuristic move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundOver`] if the round has ended.
    #[instrument(skip(self, rng), fields(moves = self.moves_played))]
    pub fn play_computer<R>(&mut self, rng: &mut R) -> Result<Move, MoveError>
    where
        R: Rng + ?Sized,
    {
        let symbol = self.to_move().ok_or(MoveError::RoundOver)?;
        // A round awaiting a move always has an open cell.
        let position = strategy::choose_move(&mut self.board, symbol, symbol.opponent(), rng)
            .ok_or(MoveError::RoundOver)?;
        Ok(self.record(Move::new(symbol, position)))
    }

    /// Advances the state machine after a successful placement.
    fn record(&mut self, mov: Move) -> Move {
        self.moves_played += 1;
        self.state = self.evaluate(mov.symbol);
        info!(%mov, state = ?self.state, "Move applied");
        mov
    }

    fn evaluate(&self, mover: Symbol) -> RoundState {
        if self.moves_played < MIN_MOVES_FOR_OUTCOME {
            return RoundState::AwaitingMove(mover.opponent());
        }
        if has_won(&self.board, mover) {
            RoundState::Won(mover)
        } else if is_draw(&self.board) {
            RoundState::Draw
        } else {
            RoundState::AwaitingMove(mover.opponent())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn play_all(round: &mut Round, numbers: &[i64]) {
        for &number in numbers {
            round.play(number).unwrap();
        }
    }

    #[test]
    fn test_new_round_awaits_opener() {
        let round = Round::new(Symbol::O);
        assert_eq!(round.state(), RoundState::AwaitingMove(Symbol::O));
        assert_eq!(round.moves_played(), 0);
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut round = Round::new(Symbol::X);
        let mov = round.play(5).unwrap();
        assert_eq!(mov, Move::new(Symbol::X, Position::Center));
        assert_eq!(round.to_move(), Some(Symbol::O));
        round.play(1).unwrap();
        assert_eq!(round.to_move(), Some(Symbol::X));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut round = Round::new(Symbol::X);
        round.play(5).unwrap();
        assert_eq!(round.play(5), Err(MoveError::OccupiedCell(Position::Center)));
        assert_eq!(round.play(0), Err(MoveError::InvalidPosition(0)));
        assert_eq!(round.to_move(), Some(Symbol::O));
        assert_eq!(round.moves_played(), 1);
    }

    #[test]
    fn test_win_on_fifth_move() {
        let mut round = Round::new(Symbol::X);
        play_all(&mut round, &[1, 4, 2, 5]);
        assert!(!round.is_over());
        round.play(3).unwrap();
        assert_eq!(round.state(), RoundState::Won(Symbol::X));
        assert_eq!(round.outcome(), Some(RoundOutcome::Winner(Symbol::X)));
        assert_eq!(round.play(9), Err(MoveError::RoundOver));
    }

    #[test]
    fn test_draw_detected_before_board_fills() {
        let mut round = Round::new(Symbol::X);
        // X O X / X O O / O X _  -- every line is blocked after 8 moves.
        play_all(&mut round, &[1, 2, 3, 5, 4, 6, 8, 7]);
        assert_eq!(round.state(), RoundState::Draw);
        assert_eq!(round.moves_played(), 8);
    }

    #[test]
    fn test_computer_move_is_recorded() {
        let mut round = Round::new(Symbol::O);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mov = round.play_computer(&mut rng).unwrap();
        assert_eq!(mov, Move::new(Symbol::O, Position::Center));
        assert_eq!(round.to_move(), Some(Symbol::X));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::Winner(Symbol::O).to_string(), "O wins");
        assert!(RoundOutcome::Draw.is_draw());
        assert_eq!(RoundOutcome::Draw.winner(), None);
    }
}
