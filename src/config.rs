//! Match configuration: the registry of players to spawn.

use crate::agent::Policy;
use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One entry in the player registry: a mark and the policy driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Mark this player places.
    mark: Mark,
    /// Move-selection policy.
    policy: Policy,
}

impl PlayerSpec {
    /// Creates a player spec.
    pub fn new(mark: Mark, policy: Policy) -> Self {
        Self { mark, policy }
    }
}

/// Configuration for one match: the players to spawn and their pacing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player registry; agents are spawned uniformly over it.
    players: Vec<PlayerSpec>,

    /// Pause interval in milliseconds, applied per each policy's pacing
    /// rule.
    #[serde(default = "default_pause_ms")]
    pause_ms: u64,
}

fn default_pause_ms() -> u64 {
    100
}

impl MatchConfig {
    /// Creates a validated configuration.
    pub fn new(players: Vec<PlayerSpec>, pause_ms: u64) -> Result<Self, ConfigError> {
        let config = Self { players, pause_ms };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(players = config.players.len(), "Match config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, falling back to the default topology.
    ///
    /// A missing file is not an error; a malformed one is.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using default topology");
            Ok(Self::default())
        }
    }

    /// The pause interval as a [`Duration`].
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Checks the registry: exactly two players, one per mark.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::new(format!(
                "Expected exactly 2 players, got {}",
                self.players.len()
            )));
        }
        if self.players[0].mark == self.players[1].mark {
            return Err(ConfigError::new(format!(
                "Both players use mark {}",
                self.players[0].mark
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    /// The fixed topology of the original game: X sweeps sequentially,
    /// O picks at random, 100 ms pause.
    fn default() -> Self {
        Self {
            players: vec![
                PlayerSpec::new(Mark::X, Policy::Sequential),
                PlayerSpec::new(Mark::O, Policy::Random),
            ],
            pause_ms: default_pause_ms(),
        }
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
