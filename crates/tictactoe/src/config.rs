//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, Marker, PlayerRegistry};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// Player names, markers and log destination.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the first player (moves first).
    #[serde(default = "default_first_name")]
    first_name: String,

    /// Marker of the first player.
    #[serde(default = "default_first_marker")]
    first_marker: char,

    /// Display name of the second player.
    #[serde(default = "default_second_name")]
    second_name: String,

    /// Marker of the second player.
    #[serde(default = "default_second_marker")]
    second_marker: char,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_first_name() -> String {
    DEFAULT_FIRST_NAME.to_string()
}

fn default_second_name() -> String {
    DEFAULT_SECOND_NAME.to_string()
}

fn default_first_marker() -> char {
    Marker::O.symbol()
}

fn default_second_marker() -> char {
    Marker::X.symbol()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            first_marker: default_first_marker(),
            second_name: default_second_name(),
            second_marker: default_second_marker(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = %config.first_name, second = %config.second_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit path, else the file named by [`CONFIG_ENV_VAR`], else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces names and log file with any values given on the command line.
    pub fn with_overrides(
        mut self,
        first_name: Option<String>,
        second_name: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(name) = first_name {
            self.first_name = name;
        }
        if let Some(name) = second_name {
            self.second_name = name;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Builds the player registry this configuration describes.
    #[instrument(skip(self))]
    pub fn registry(&self) -> Result<PlayerRegistry, ConfigError> {
        let first = Marker::new(self.first_marker)
            .map_err(|e| ConfigError::new(format!("Invalid first_marker: {}", e)))?;
        let second = Marker::new(self.second_marker)
            .map_err(|e| ConfigError::new(format!("Invalid second_marker: {}", e)))?;
        PlayerRegistry::new(self.first_name.clone(), first, self.second_name.clone(), second)
            .map_err(|e| ConfigError::new(e.to_string()))
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
