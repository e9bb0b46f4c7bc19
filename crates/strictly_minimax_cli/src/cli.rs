//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Mark, OpeningPolicy};

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the computer on the terminal
    Play {
        /// Path to the game config (defaults are used if it does not exist)
        #[arg(short, long, default_value = "strictly_minimax.toml")]
        config: std::path::PathBuf,

        /// Mark to play as (X or O)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// How the computer opens on a blank board (random or search)
        #[arg(long)]
        opening: Option<OpeningPolicy>,

        /// Seed for the opening move, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the best move for a position
    Suggest {
        /// Board as nine cells, e.g. "XX. OO. ..." (`.`, `_`, `-` or a digit for empty)
        #[arg(short, long)]
        board: String,

        /// Mark to move
        #[arg(short, long)]
        player: Mark,

        /// Score every legal move instead of only the best one
        #[arg(long)]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play against itself
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// How the first move of each game is chosen
        #[arg(long, default_value = "random")]
        opening: OpeningPolicy,

        /// Seed for the opening moves
        #[arg(long)]
        seed: Option<u64>,
    },
}
