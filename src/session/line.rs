//! This module defines the structure for a single displayed terminal line.
use chrono::Local;

/// How a line is styled when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An echoed submission, prefixed with the prompt.
    Input,
    /// Regular command output.
    Output,
    /// An error message.
    Error,
    /// Boot, login and hint messages.
    System,
}

/// A single line in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The kind of the line.
    pub kind: LineKind,
    /// The text content of the line.
    pub text: String,
    /// Local wall-clock time the line was appended at, if stamped.
    pub timestamp: Option<String>,
}

impl Line {
    /// Creates a line stamped with the current local time.
    pub fn stamped(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Some(now_stamp()),
        }
    }

    /// Creates a line without a timestamp.
    pub fn bare(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: None,
        }
    }
}

/// Formats the current local time the way the log column shows it.
pub fn now_stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
