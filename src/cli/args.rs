//! CLI argument definitions using clap
//!
//! menagerie [--config <path>] [--data <path>] [--format text|json] [--log-level <level>]
//!
//! Every flag is optional; flags override values from the config file.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Validate and print the demo records and the records in a JSON data file
#[derive(Parser, Debug, Default)]
#[command(name = "menagerie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file (array of animals)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum log severity written to stderr
    #[arg(long)]
    pub log_level: Option<String>,
}

/// How records are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<label> <display form>`
    #[default]
    Text,
    /// One JSON object per line: `{"label": ..., "record": {...}}`
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
