//! Non-interactive commands: position analysis and self-play.

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use strictly_minimax::{Board, Mark, OpeningPolicy, Outcome, choose_move, minimax, rules::evaluate, score_moves};
use tracing::{debug, info, instrument};

/// Score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Board index of the move.
    pub index: usize,
    /// Minimax score after playing it.
    pub score: i32,
}

/// Analysis of one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board in compact form.
    pub board: String,
    /// Mark to move.
    pub player: Mark,
    /// Outcome of the board as given.
    pub outcome: Outcome,
    /// Recommended index, absent when the game is decided.
    pub best: Option<usize>,
    /// Minimax score of the position for `player`.
    pub score: i32,
    /// Nodes visited by the search.
    pub nodes: u64,
    /// Every legal move with its score, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<MoveScore>>,
}

/// Analyses `board` for `player`.
#[instrument]
pub fn suggest(board: &str, player: Mark, all: bool) -> Result<Suggestion> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let result = minimax(&board, player);
    let moves = all.then(|| {
        score_moves(&board, player)
            .into_iter()
            .map(|(pos, score)| MoveScore {
                index: pos.to_index(),
                score,
            })
            .collect()
    });

    Ok(Suggestion {
        board: board.to_compact(),
        player,
        outcome: evaluate(&board),
        best: result.index(),
        score: result.score,
        nodes: result.nodes,
        moves,
    })
}

/// Writes a suggestion as text or JSON.
pub fn write_suggestion<W: Write>(suggestion: &Suggestion, json: bool, output: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *output, suggestion)?;
        writeln!(output)?;
        return Ok(());
    }

    match suggestion.best {
        Some(index) => writeln!(
            output,
            "Best move for {}: {} (score {})",
            suggestion.player, index, suggestion.score
        )?,
        None => writeln!(output, "No move: {} (score {})", suggestion.outcome, suggestion.score)?,
    }
    if let Some(moves) = &suggestion.moves {
        for m in moves {
            writeln!(output, "  {}: {}", m.index, m.score)?;
        }
    }
    Ok(())
}

/// Outcome counts over a self-play run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` computer-versus-computer games, X moving first.
#[instrument(skip(rng))]
pub fn self_play<G: Rng>(games: u32, opening: OpeningPolicy, rng: &mut G) -> Result<Tally> {
    let mut tally = Tally::default();
    for game in 0..games {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        let mut outcome = evaluate(&board);
        while !outcome.is_terminal() {
            let pos = choose_move(&board, to_move, opening, rng)?;
            board.place(pos.to_index(), to_move)?;
            to_move = to_move.opponent();
            outcome = evaluate(&board);
        }
        debug!(game, board = %board.to_compact(), %outcome, "Self-play game finished");
        tally.add(outcome);
    }
    info!(%tally, "Self-play finished");
    Ok(tally)
}
