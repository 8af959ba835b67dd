//! Severity levels and the line value broadcast to every sink.

use std::fmt;

use chrono::{DateTime, Local};

/// Severity level for a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
    /// Only delivered when verbose output is switched on.
    Verbose,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Success => write!(f, "success"),
            Severity::Verbose => write!(f, "verbose"),
        }
    }
}

/// A single message on its way through the broadcaster.
///
/// The text already carries its trailing newline; sinks write it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticLine {
    severity: Severity,
    text: String,
    timestamp: DateTime<Local>,
}

impl DiagnosticLine {
    /// Create a line stamped with the current local time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let mut text = message.into();
        text.push('\n');
        Self {
            severity,
            text,
            timestamp: Local::now(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Newline-terminated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}
