//! Move selection for the computer player.
//!
//! - [`minimax`]: exhaustive, deterministic adversarial search
//! - [`opening`]: the random-opening policy layered on top of it

pub mod minimax;
pub mod opening;

pub use minimax::{SearchResult, WIN_SCORE, best_move, minimax, score_moves};
pub use opening::{OpeningPolicy, choose_move, random_position};
