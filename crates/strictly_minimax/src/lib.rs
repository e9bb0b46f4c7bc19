//! Strictly Minimax - tic-tac-toe against a perfect opponent.
//!
//! The crate is the pure game core with no I/O:
//!
//! - **Board**: a fixed 3x3 grid with checked placement
//! - **Rules**: win, draw and ongoing judgment derived from the grid
//! - **Search**: exhaustive minimax with depth-aware scoring, plus the
//!   random-opening policy layered on top of it
//! - **Session**: turn order, move validation and restart for a
//!   human-versus-computer game
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, minimax};
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let result = minimax(&board, Mark::X);
//! assert_eq!(result.index(), Some(2));
//! assert!(result.score > 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

// Crate-level exports - Board model
pub use board::{Board, ParseBoardError};
pub use position::{CELLS, Position, SIDE};
pub use types::{Cell, Mark, Outcome};

// Crate-level exports - Errors
pub use error::{BoardError, GameError, SearchError};

// Crate-level exports - Search
pub use search::{
    OpeningPolicy, SearchResult, WIN_SCORE, best_move, choose_move, minimax, random_position,
    score_moves,
};

// Crate-level exports - Sessions
pub use action::Move;
pub use session::{Session, SessionSettings};
