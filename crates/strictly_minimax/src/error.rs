//! Error types for board mutation, search and sessions.

use crate::{Mark, Position};

/// Error raised by board queries and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index is outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),
}

impl std::error::Error for BoardError {}

/// Error raised when the search engine is asked for a move it cannot make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or full.
    #[display("No moves available: the game is already decided")]
    NoMovesAvailable,
}

impl std::error::Error for SearchError {}

/// Error raised when a session rejects a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),

    /// The board rejected the move.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),

    /// The search engine could not produce a move.
    #[display("{}", _0)]
    #[from]
    Search(SearchError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            GameError::Search(err) => Some(err),
            GameError::GameOver | GameError::NotYourTurn(_) => None,
        }
    }
}
