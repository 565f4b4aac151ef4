//! Error types for the Notedeck core library.

use thiserror::Error;

/// All errors that can occur within the Notedeck core library.
///
/// Filtering is deliberately quiet: unknown filter names, empty search text
/// and malformed tag values never produce an error. The only failure a filter
/// call can report is search text that does not compile as a pattern.
#[derive(Debug, Error)]
pub enum NotedeckError {
    /// Search text could not be compiled as a regular expression.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A sort direction other than `asc` or `desc` was supplied.
    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),

    /// Reading a record source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record or options data could not be deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotedeckError`].
pub type Result<T> = std::result::Result<T, NotedeckError>;

impl NotedeckError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPattern(_) => "Search text is not a valid pattern".to_string(),
            Self::InvalidSortDirection(dir) => format!("Unknown sort direction: {dir}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
