//! Record error types
//!
//! Error codes:
//! - MENAGERIE_PARSE_FAILED (malformed serialized input)
//! - MENAGERIE_VALIDATION_FAILED (well-formed input violating the schema)
//! - MENAGERIE_IO_FAILED (data file could not be read)

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Record error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorCode {
    /// Input text is not well-formed
    ParseFailed,
    /// Input violates one or more field constraints
    ValidationFailed,
    /// Input file could not be read
    IoFailed,
}

impl RecordErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            RecordErrorCode::ParseFailed => "MENAGERIE_PARSE_FAILED",
            RecordErrorCode::ValidationFailed => "MENAGERIE_VALIDATION_FAILED",
            RecordErrorCode::IoFailed => "MENAGERIE_IO_FAILED",
        }
    }
}

impl fmt::Display for RecordErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path (e.g., "size" or "[2].size")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::new(field, "no undeclared fields", "extra field present")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }

    /// Returns a copy of this violation with its field path nested under `prefix`
    pub fn prefixed(&self, prefix: &str) -> Self {
        let field = if self.field.starts_with('[') || prefix.is_empty() {
            format!("{}{}", prefix, self.field)
        } else {
            format!("{}.{}", prefix, self.field)
        };
        Self {
            field,
            expected: self.expected.clone(),
            actual: self.actual.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Well-formed input that violates the schema.
///
/// Carries every violation found, never just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    model: String,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Create a validation error for the given model
    pub fn new(model: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            model: model.into(),
            violations,
        }
    }

    /// Create a validation error with a single violation
    pub fn single(model: impl Into<String>, violation: Violation) -> Self {
        Self::new(model, vec![violation])
    }

    /// Returns the model name the input was validated against
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns all violations in the order they were found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violated field paths
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Returns true if any violation concerns the given field path
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Returns the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the error code
    pub fn code(&self) -> RecordErrorCode {
        RecordErrorCode::ValidationFailed
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} validation failed with {} violation(s)",
            self.model,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Malformed serialized input that cannot be structurally interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    line: usize,
    column: usize,
}

impl ParseError {
    /// Create a parse error at the given position
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Returns the parser's message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based line of the failure
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column of the failure
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the error code
    pub fn code(&self) -> RecordErrorCode {
        RecordErrorCode::ParseFailed
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string(), e.line(), e.column())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed input: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Any failure producing a record
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RecordError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RecordError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> RecordErrorCode {
        match self {
            RecordError::Parse(_) => RecordErrorCode::ParseFailed,
            RecordError::Validation(_) => RecordErrorCode::ValidationFailed,
            RecordError::Io { .. } => RecordErrorCode::IoFailed,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, RecordError::Parse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RecordError::Validation(_))
    }

    /// Returns the validation error if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            RecordError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::Parse(ParseError::from(e))
    }
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;
