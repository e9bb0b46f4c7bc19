//! Strictly Minimax - unified CLI.

use anyhow::Result;
use clap::Parser;
use strictly_minimax_cli::{Cli, Command, GameConfig, run_play, seeded_rng, self_play, suggest, write_suggestion};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mark,
            opening,
            seed,
        } => run_play_command(config, mark, opening, seed),
        Command::Suggest {
            board,
            player,
            all,
            json,
        } => {
            let suggestion = suggest(&board, player, all)?;
            write_suggestion(&suggestion, json, &mut std::io::stdout().lock())
        }
        Command::SelfPlay {
            games,
            opening,
            seed,
        } => {
            let tally = self_play(games, opening, &mut seeded_rng(seed))?;
            println!("{}", tally);
            Ok(())
        }
    }
}

/// Run an interactive game on the terminal
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play_command(
    config_path: std::path::PathBuf,
    mark: Option<strictly_minimax::Mark>,
    opening: Option<strictly_minimax::OpeningPolicy>,
    seed: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?.with_overrides(mark, opening, seed);
    info!(?config, "Starting interactive game");

    let mut rng = config.rng();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_play(&config, &mut rng, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
