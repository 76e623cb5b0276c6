//! CLI module
//!
//! Parses flags, resolves configuration, and runs the record demo:
//! built-in records first, then every record in the data file.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, OutputFormat};
pub use commands::{run, run_with};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_record;
