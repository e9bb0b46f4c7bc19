//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the search engine can call them at every
//! node without any bookkeeping of its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Judges the board: a completed line wins, a full board draws, anything
/// else is still in progress.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
