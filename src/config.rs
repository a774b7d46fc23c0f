//! Host configuration: board size, opponent strategy, seat order.

use crate::games::turret::{MAX_BOARD_SIZE, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the person at the keyboard
/// moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human (or the first-named strategy in a duel) plays as Player 1.
    #[default]
    Human,
    /// The computer (or the second-named strategy) plays as Player 1.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Settings for a hosted game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Board side length.
    board_size: usize,

    /// Strategy used by the computer opponent.
    strategy: Strategy,

    /// Who moves first.
    first_player: FirstPlayer,

    /// Seed for the opponent's random choices; fresh entropy when absent.
    seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            strategy: Strategy::default(),
            first_player: FirstPlayer::default(),
            seed: None,
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            board_size = config.board_size,
            strategy = %config.strategy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that every field is usable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} is out of range (must be 1-{})",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        strategy: Option<Strategy>,
        first_player: Option<FirstPlayer>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(first) = first_player {
            self.first_player = first;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
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
