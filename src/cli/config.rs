//! Run configuration
//!
//! Optional JSON file; every key has a default. Command-line flags take
//! precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::{Cli, OutputFormat};
use super::errors::{CliError, CliResult};
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON data file holding an array of animals (default "./data.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Minimum log severity (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format (default "text")
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: file (or defaults), then flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(data) = &cli.data {
            config.data_file = data.clone();
        }
        if let Some(format) = cli.format {
            config.format = format;
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }
        self.severity()?;
        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(e))
    }
}
