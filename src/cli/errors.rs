//! CLI-specific error types
//!
//! Every CLI error ends the run with a non-zero exit code.

use std::fmt;
use std::io;

use crate::schema::{RecordError, RecordErrorCode};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag error
    ConfigError,
    /// I/O error writing output
    IoError,
    /// A record could not be read, parsed or validated
    Record(RecordErrorCode),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "MENAGERIE_CLI_CONFIG_ERROR",
            Self::IoError => "MENAGERIE_CLI_IO_ERROR",
            Self::Record(code) => code.code(),
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<RecordError> for CliError {
    fn from(e: RecordError) -> Self {
        Self::new(CliErrorCode::Record(e.code()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ValidationError, Violation};

    #[test]
    fn test_record_error_keeps_its_code() {
        let err: CliError = RecordError::from(ValidationError::single(
            "Animal",
            Violation::missing_field("breed"),
        ))
        .into();
        assert_eq!(err.code_str(), "MENAGERIE_VALIDATION_FAILED");
        assert!(err.message().contains("breed"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad log level");
        assert_eq!(err.to_string(), "MENAGERIE_CLI_CONFIG_ERROR: bad log level");
    }
}
