//! Human-versus-computer game flow.
//!
//! A [`Session`] holds everything a front end needs between turns: the
//! board, which side the human took, whose turn it is and the move history.
//! The outcome is re-derived from the board after every move.

use crate::action::Move;
use crate::error::GameError;
use crate::rules::evaluate;
use crate::search::{OpeningPolicy, choose_move};
use crate::{Board, Mark, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Options fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Mark that moves first in every game.
    pub first: Mark,
    /// How the computer opens on a blank board.
    pub opening: OpeningPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            first: Mark::X,
            opening: OpeningPolicy::default(),
        }
    }
}

/// A game between a human and the computer.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    human: Mark,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
    settings: SessionSettings,
}

impl Session {
    /// Starts a game with the human playing `human`; the computer takes the
    /// other mark.
    #[instrument]
    pub fn new(human: Mark, settings: SessionSettings) -> Self {
        info!(computer = %human.opponent(), first = %settings.first, "Starting session");
        Self {
            board: Board::new(),
            human,
            to_move: settings.first,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
            settings,
        }
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// Mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.computer()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome as of the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Session settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Plays the human's move at `index` (0-8).
    ///
    /// Rejected moves leave the session unchanged.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.check_turn(self.human)?;
        let position = self.board.place(index, self.human)?;
        Ok(self.record(Move::new(self.human, position)))
    }

    /// Computes and plays the computer's move.
    #[instrument(skip(self, rng))]
    pub fn play_computer<R: Rng>(&mut self, rng: &mut R) -> Result<Move, GameError> {
        let mark = self.computer();
        self.check_turn(mark)?;
        let position = choose_move(&self.board, mark, self.settings.opening, rng)?;
        self.board.place(position.to_index(), mark)?;
        let action = Move::new(mark, position);
        self.record(action);
        Ok(action)
    }

    /// Starts a fresh game with the same sides and settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous = %self.outcome, moves = self.history.len(), "Restarting session");
        *self = Self::new(self.human, self.settings);
    }

    fn check_turn(&self, mark: Mark) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.to_move != mark {
            return Err(GameError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn record(&mut self, action: Move) -> Outcome {
        self.history.push(action);
        self.to_move = action.mark.opponent();
        self.outcome = evaluate(&self.board);
        debug!(%action, outcome = %self.outcome, "Move recorded");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardError, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_human_first_as_x() {
        let mut session = Session::new(Mark::X, SessionSettings::default());
        assert_eq!(session.to_move(), Mark::X);
        assert!(!session.is_computer_turn());
        assert_eq!(session.play_human(4), Ok(Outcome::Ongoing));
        assert_eq!(session.to_move(), Mark::O);
        assert!(session.is_computer_turn());
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = Session::new(Mark::X, SessionSettings::default());
        session.play_human(0).unwrap();
        assert_eq!(session.play_human(1), Err(GameError::NotYourTurn(Mark::X)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = Session::new(Mark::O, SessionSettings::default());
        let mut rng = StdRng::seed_from_u64(1);
        let opening = session.play_computer(&mut rng).unwrap();
        let board = session.board().clone();

        assert_eq!(
            session.play_human(opening.position.to_index()),
            Err(GameError::Board(BoardError::OccupiedCell(opening.position)))
        );
        assert_eq!(
            session.play_human(9),
            Err(GameError::Board(BoardError::InvalidIndex(9)))
        );
        assert_eq!(session.board(), &board);
        assert_eq!(session.to_move(), Mark::O);
    }

    #[test]
    fn test_computer_blocks() {
        let settings = SessionSettings {
            first: Mark::X,
            opening: OpeningPolicy::Search,
        };
        let mut session = Session::new(Mark::X, settings);
        let mut rng = StdRng::seed_from_u64(0);
        session.play_human(0).unwrap();
        // The only reply to a corner opening that does not lose is the center.
        let first = session.play_computer(&mut rng).unwrap();
        assert_eq!(first.position, Position::Center);
        session.play_human(1).unwrap();
        let reply = session.play_computer(&mut rng).unwrap();
        assert_eq!(reply.position, Position::TopRight);
    }

    #[test]
    fn test_restart_keeps_sides() {
        let mut session = Session::new(Mark::O, SessionSettings::default());
        let mut rng = StdRng::seed_from_u64(9);
        session.play_computer(&mut rng).unwrap();
        session.restart();
        assert!(session.board().is_blank());
        assert!(session.history().is_empty());
        assert_eq!(session.human(), Mark::O);
        assert_eq!(session.to_move(), Mark::X);
        assert_eq!(session.outcome(), Outcome::Ongoing);
    }
}
