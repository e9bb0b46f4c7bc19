//! Opening policy for the computer player.
//!
//! On a blank board the engine's answer is always the same cell, so by
//! default the first computer move is picked at random for variety. Every
//! later move goes through the full search.

use super::minimax::best_move;
use crate::error::SearchError;
use crate::position::CELLS;
use crate::{Board, Mark, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the computer picks its move on a blank board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OpeningPolicy {
    /// Pick any cell uniformly at random.
    #[default]
    Random,
    /// Run the search like on any other move.
    Search,
}

/// Uniformly random position in 0-8.
pub fn random_position<R: Rng>(rng: &mut R) -> Position {
    let index = rng.random_range(0..CELLS);
    Position::ALL[index]
}

/// Picks the computer's move for `mark` under `policy`.
#[instrument(skip(board, rng), fields(cells = %board.to_compact()))]
pub fn choose_move<R: Rng>(
    board: &Board,
    mark: Mark,
    policy: OpeningPolicy,
    rng: &mut R,
) -> Result<Position, SearchError> {
    if policy == OpeningPolicy::Random && board.is_blank() {
        let pos = random_position(rng);
        debug!(%pos, "Random opening");
        return Ok(pos);
    }
    best_move(board, mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_position_covers_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Position> = (0..500).map(|_| random_position(&mut rng)).collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_opening() {
        let board = Board::new();
        let a = choose_move(&board, Mark::X, OpeningPolicy::Random, &mut StdRng::seed_from_u64(42));
        let b = choose_move(&board, Mark::X, OpeningPolicy::Random, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_policy_ignores_rng() {
        let board = Board::new();
        let expected = best_move(&board, Mark::X);
        for seed in 0..3 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(choose_move(&board, Mark::X, OpeningPolicy::Search, &mut rng), expected);
        }
    }

    #[test]
    fn test_non_blank_board_always_searches() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            choose_move(&board, Mark::X, OpeningPolicy::Random, &mut rng),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_policy_parses_from_text() {
        assert_eq!("random".parse::<OpeningPolicy>(), Ok(OpeningPolicy::Random));
        assert_eq!("Search".parse::<OpeningPolicy>(), Ok(OpeningPolicy::Search));
        assert_eq!(OpeningPolicy::Search.to_string(), "search");
    }
}
