//! Exhaustive minimax search.
//!
//! The tree for a 3x3 board has at most 9! leaves, so the search visits
//! every continuation with no pruning and no transposition table. Scores are
//! always from the perspective of the mark passed to [`minimax`]:
//!
//! - win for that mark: `WIN_SCORE - occupied`
//! - win for the opponent: `-(WIN_SCORE - occupied)`
//! - draw: `0`
//!
//! where `occupied` is the number of filled cells on the terminal board, so
//! quick wins beat slow ones and slow losses beat quick ones.

use crate::error::SearchError;
use crate::rules::evaluate;
use crate::{Board, Cell, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Base magnitude of a win before the occupied-cell penalty.
pub const WIN_SCORE: i32 = 10;

/// Best move found by a search, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen position, or `None` when the board was already decided.
    pub best: Option<Position>,
    /// Score from the searched-for mark's perspective.
    pub score: i32,
    /// Number of nodes visited, root included.
    pub nodes: u64,
}

impl SearchResult {
    /// Chosen board index, if any.
    pub fn index(&self) -> Option<usize> {
        self.best.map(Position::to_index)
    }
}

/// Finds the optimal move for `player`, assuming the opponent also plays
/// optimally.
///
/// `player` is the mark to move at the root. The caller's board is never
/// mutated; the search plays and undoes moves on a private copy. On a board
/// that is already won or full the result carries `best: None` and the
/// terminal score.
///
/// Ties go to the lowest index, so repeated calls return identical results.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn minimax(board: &Board, player: Mark) -> SearchResult {
    let mut work = board.clone();
    let mut nodes = 0;
    let (best, score) = search(&mut work, player, player, &mut nodes);
    debug!(?best, score, nodes, "Search complete");
    SearchResult { best, score, nodes }
}

/// Like [`minimax`] but insists on a move.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn best_move(board: &Board, player: Mark) -> Result<Position, SearchError> {
    minimax(board, player)
        .best
        .ok_or(SearchError::NoMovesAvailable)
}

/// Scores every legal move for `player` at the root.
///
/// Each entry is the minimax value of the position after `player` plays
/// there, in increasing index order. Empty when the board is decided.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn score_moves(board: &Board, player: Mark) -> Vec<(Position, i32)> {
    if evaluate(board).is_terminal() {
        return Vec::new();
    }

    let mut work = board.clone();
    let mut nodes = 0;
    let scored: Vec<(Position, i32)> = Position::ALL
        .into_iter()
        .filter(|pos| board.cell(*pos).is_empty())
        .map(|pos| {
            work.set(pos, Cell::Occupied(player));
            let (_, score) = search(&mut work, player, player.opponent(), &mut nodes);
            work.set(pos, Cell::Empty);
            (pos, score)
        })
        .collect();
    debug!(moves = scored.len(), nodes, "Scored root moves");
    scored
}

/// Terminal score of `outcome` for `root`, or `None` while the game goes on.
fn terminal_score(outcome: Outcome, root: Mark, occupied: usize) -> Option<i32> {
    let magnitude = WIN_SCORE - occupied as i32;
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(0),
        Outcome::Win(mark) if mark == root => Some(magnitude),
        Outcome::Win(_) => Some(-magnitude),
    }
}

/// Recursive step. `board` is restored before returning.
fn search(
    board: &mut Board,
    root: Mark,
    to_move: Mark,
    nodes: &mut u64,
) -> (Option<Position>, i32) {
    *nodes += 1;

    if let Some(score) = terminal_score(evaluate(board), root, board.occupied_count()) {
        return (None, score);
    }

    let maximizing = to_move == root;
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.cell(pos).is_empty() {
            continue;
        }

        board.set(pos, Cell::Occupied(to_move));
        let (_, score) = search(board, root, to_move.opponent(), nodes);
        board.set(pos, Cell::Empty);

        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => (Some(pos), score),
        // Unreachable: a non-terminal board always has an empty cell.
        None => (None, 0),
    }
}
