//! Interactive terminal game.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_minimax::{Mark, Outcome, Session};
use tracing::{debug, info, instrument};

/// Results across every game of one `play` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
    /// Games the human won.
    pub wins: u32,
    /// Games the computer won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
    /// Games abandoned before they finished.
    pub abandoned: u32,
}

impl PlayRecord {
    fn add(&mut self, outcome: Outcome, human: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == human => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => self.abandoned += 1,
        }
    }
}

impl std::fmt::Display for PlayRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Won {}, lost {}, drew {}",
            self.wins, self.losses, self.draws
        )?;
        if self.abandoned > 0 {
            write!(f, ", abandoned {}", self.abandoned)?;
        }
        Ok(())
    }
}

/// What the player typed at a prompt.
enum Input {
    Index(usize),
    Quit,
    Invalid(String),
}

fn read_input<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_move(line: &str) -> Input {
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(index) => Input::Index(index),
            Err(_) => Input::Invalid(line.to_string()),
        },
    }
}

/// Plays games on `input`/`output` until the player declines a rematch,
/// quits, or input ends.
#[instrument(skip_all, fields(human = %config.human_mark()))]
pub fn run_play<R, W, G>(config: &GameConfig, rng: &mut G, input: &mut R, output: &mut W) -> Result<PlayRecord>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut session = Session::new(*config.human_mark(), config.session_settings());
    let mut record = PlayRecord::default();

    writeln!(
        output,
        "You are {}. Enter a square number (0-8) to move, or q to quit.",
        session.human()
    )?;

    loop {
        let finished = play_one(&mut session, rng, input, output)?;
        record.add(session.outcome(), session.human());
        if !finished {
            break;
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_input(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") => {
                session.restart();
            }
            _ => break,
        }
    }

    writeln!(output, "{}", record)?;
    info!(%record, "Play finished");
    Ok(record)
}

/// Runs one game. Returns false if the player quit or input ran out.
fn play_one<R, W, G>(session: &mut Session, rng: &mut G, input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    while !session.is_over() {
        if session.is_computer_turn() {
            let action = session
                .play_computer(rng)
                .context("Computer failed to move")?;
            writeln!(output, "Computer plays {}", action.position.to_index())?;
            continue;
        }

        writeln!(output, "\n{}\n", session.board())?;
        write!(output, "Your move ({}): ", session.human())?;
        output.flush()?;

        let Some(line) = read_input(input)? else {
            debug!("Input closed mid-game");
            return Ok(false);
        };
        match parse_move(&line) {
            Input::Quit => return Ok(false),
            Input::Invalid(text) => writeln!(output, "Not a square number: {:?}", text)?,
            Input::Index(index) => {
                if let Err(e) = session.play_human(index) {
                    debug!(index, error = %e, "Move rejected");
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }

    writeln!(output, "\n{}\n", session.board())?;
    writeln!(output, "{}", session.outcome())?;
    Ok(true)
}
