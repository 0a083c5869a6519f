//! Core types for the log statistics library
//!
//! This module defines the record type produced by the line parser and the
//! error type shared by the parser and the loader. Records are immutable once
//! built: every field is private and only exposed through accessors.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Ordered sequence of accepted records, in source order
pub type LogCollection = Vec<LogRecord>;

/// One accepted log entry
///
/// Built only from lines with at least four whitespace-delimited parts.
/// `date` and `time` are opaque tokens; `level` is compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    date: String,
    time: String,
    level: String,
    message: String,
}

impl LogRecord {
    /// Create a record from already-split fields
    ///
    /// The message is trimmed of outer whitespace, the other fields are taken
    /// as given. `date`, `time` and `level` must each be a single non-empty
    /// token without whitespace, and the message must not be blank, so that
    /// the record could have come from a four-part line. [`crate::parse_line`]
    /// always satisfies this; debug builds check it.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: &str,
    ) -> Self {
        let record = Self {
            date: date.into(),
            time: time.into(),
            level: level.into(),
            message: message.trim().to_string(),
        };
        debug_assert!(
            [&record.date, &record.time, &record.level]
                .iter()
                .all(|field| is_single_token(field)),
            "date, time and level must be single tokens: {:?}",
            record
        );
        debug_assert!(!record.message.is_empty(), "message must not be blank");
        record
    }

    /// First field, e.g. `2024-01-01`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Second field, e.g. `10:00:00`
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Third field, the grouping and filtering key
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Everything after the third field, outer whitespace trimmed
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn is_single_token(field: &str) -> bool {
    !field.is_empty() && !field.contains(char::is_whitespace)
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} - {}",
            self.date, self.time, self.level, self.message
        )
    }
}

/// Errors that can occur while parsing or loading logs
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Line has fewer than four whitespace-delimited parts
    #[error("Malformed log line: {line:?}")]
    MalformedLine { line: String },

    /// The source could not be opened or read to the end
    #[error("Failed to read log source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Human-readable diagnostic for the user
    ///
    /// A missing file gets its own wording; every other failure falls back to
    /// a generic message carrying the I/O description.
    pub fn diagnostic(&self) -> String {
        match self {
            LogError::SourceUnavailable { path, source }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                format!("Error: File '{}' not found.", path.display())
            }
            LogError::SourceUnavailable { source, .. } => {
                format!("An error occurred: {}", source)
            }
            LogError::MalformedLine { .. } => format!("An error occurred: {}", self),
        }
    }

    /// True if this error only affects a single line
    pub fn is_malformed_line(&self) -> bool {
        matches!(self, LogError::MalformedLine { .. })
    }
}
