//! Configuration for console play.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a human-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side played by the human; the engine takes the other.
    #[serde(default = "default_human")]
    human: Player,

    /// Print search statistics after each engine move.
    #[serde(default)]
    show_stats: bool,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

impl PlayConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(human: Player, show_stats: bool) -> Self {
        Self { human, show_stats }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, show_stats = config.show_stats, "Config loaded successfully");
        Ok(config)
    }

    /// Returns the configuration with the human playing `human`.
    pub fn with_human(self, human: Player) -> Self {
        Self { human, ..self }
    }

    /// Side played by the engine.
    pub fn engine(&self) -> Player {
        self.human.opponent()
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(default_human(), false)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
