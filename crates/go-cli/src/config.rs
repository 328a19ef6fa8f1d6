//! Configuration file loading for the terminal front end.
//!
//! Settings come from `go.toml` in the current directory (or its parent)
//! unless a path is given explicitly. Every field is optional.

use go_engine::{SessionConfig, CAPTURE_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The capture limit must be at least one stone.
    #[error("capture_limit must be greater than zero")]
    InvalidCaptureLimit,
    /// The log level is not one of trace, debug, info, warn, error.
    #[error("invalid log_level '{0}'")]
    InvalidLogLevel(String),
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Stones a player may lose before the game ends.
    pub capture_limit: u32,
    /// Mark points the player to move may not play.
    pub show_forbidden: bool,
    /// Print column letters and row numbers around the board.
    pub show_coordinates: bool,
    /// Ask before restarting a game that has moves.
    pub confirm_restart: bool,
    /// Log level used when no `-v` flag is given.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            capture_limit: CAPTURE_LIMIT,
            show_forbidden: true,
            show_coordinates: true,
            confirm_restart: true,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Default configuration file name.
    pub const FILE_NAME: &'static str = "go.toml";

    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one, `go.toml` is
    /// looked up in the current and parent directory, and defaults are used
    /// when neither has it.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let candidates = [
            PathBuf::from(Self::FILE_NAME),
            Path::new("..").join(Self::FILE_NAME),
        ];
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::read(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that TOML typing alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_limit == 0 {
            return Err(ConfigError::InvalidCaptureLimit);
        }
        self.log_level()?;
        Ok(())
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the settings handed to each game session.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            capture_limit: self.capture_limit,
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
