//! Terminal front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal grid.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Title shown above the grid.
    #[serde(default = "default_title")]
    title: String,

    /// File that receives tracing output while the terminal is in use.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// How long to wait for input before redrawing, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Show the 1-9 shortcut number in empty cells.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_grid.log")
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            poll_interval_ms: default_poll_interval_ms(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.poll_interval_ms == 0 {
            return Err(ConfigError::new(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.poll_interval_ms(), 100);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = TuiConfig::from_toml("title = \"Noughts\"\nshow_cell_numbers = false\n").unwrap();
        assert_eq!(config.title(), "Noughts");
        assert!(!*config.show_cell_numbers());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_grid.log"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let err = TuiConfig::from_toml("poll_interval_ms = 0").unwrap_err();
        assert!(err.message.contains("poll_interval_ms"));
    }

    #[test]
    fn test_bad_type_rejected() {
        let err = TuiConfig::from_toml("poll_interval_ms = \"fast\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
