//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{Mark, OpeningPolicy, SessionSettings};
use tracing::{debug, info, instrument};

/// Settings for terminal games.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark the human plays.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Mark that moves first.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,

    /// How the computer opens on a blank board.
    #[serde(default)]
    opening: OpeningPolicy,

    /// Fixed RNG seed; games are seeded from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_first_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            first_mark: default_first_mark(),
            opening: OpeningPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human_mark, opening = %config.opening, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        human_mark: Option<Mark>,
        opening: Option<OpeningPolicy>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(policy) = opening {
            self.opening = policy;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Session settings derived from this config.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            first: self.first_mark,
            opening: self.opening,
        }
    }

    /// RNG for the computer's opening moves.
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }
}

/// Seeded RNG when a seed is given, OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
