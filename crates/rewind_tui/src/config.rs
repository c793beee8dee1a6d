//! Front-end configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::DisplayOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// List moves newest first on start.
    #[serde(default)]
    descending: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            descending: false,
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: file values, then CLI flags.
    #[instrument(skip(cli))]
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        if cli.descending {
            config.descending = true;
        }
        Ok(config)
    }

    /// Move list order to start with.
    pub fn display_order(&self) -> DisplayOrder {
        if self.descending {
            DisplayOrder::Descending
        } else {
            DisplayOrder::Ascending
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TuiConfig::parse("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.display_order(), DisplayOrder::Ascending);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = TuiConfig::parse(
            r#"
            log_file = "/tmp/game.log"
            log_filter = "debug"
            descending = true
            "#,
        )
        .unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.display_order(), DisplayOrder::Descending);
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = TuiConfig::parse("descending = \"sometimes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_file = \"from_file.log\"").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            log_file: Some(PathBuf::from("from_cli.log")),
            descending: true,
        };
        let config = TuiConfig::from_cli(&cli).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("from_cli.log"));
        assert!(*config.descending());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/rewind_tui.toml")),
            ..Cli::default()
        };
        let err = TuiConfig::from_cli(&cli).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
