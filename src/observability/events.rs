//! Observable events
//!
//! Events are explicit and typed. Each has a fixed string form and a
//! default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Run begins
    RunStart,
    /// Run finished, all output written
    RunComplete,
    /// Run aborted by an error (FATAL)
    RunFailed,

    // Configuration
    /// Configuration loaded (from file or defaults)
    ConfigLoaded,

    // Records
    /// A record passed validation
    RecordBuilt,
    /// A record failed validation or parsing
    RecordRejected,
    /// Data file read and every record validated
    DataFileLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RunStart => "MENAGERIE_RUN_BEGIN",
            Event::RunComplete => "MENAGERIE_RUN_COMPLETE",
            Event::RunFailed => "MENAGERIE_RUN_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RecordBuilt => "RECORD_BUILT",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::DataFileLoaded => "DATA_FILE_LOADED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordBuilt => Severity::Trace,
            Event::RecordRejected => Severity::Error,
            Event::RunFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RunFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
