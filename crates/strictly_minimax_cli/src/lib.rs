//! Terminal front end for strictly_minimax.
//!
//! The binary is a thin layer over the game core: it parses arguments,
//! loads the optional TOML config, and drives a [`strictly_minimax::Session`]
//! over stdin/stdout.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod play;

pub use analysis::{MoveScore, Suggestion, Tally, self_play, suggest, write_suggestion};
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, seeded_rng};
pub use play::{PlayRecord, run_play};
