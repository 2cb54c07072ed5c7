//! Error types for the chat-stats library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the application.

use thiserror::Error;

/// Errors that can occur while reading a transcript and building statistics.
#[derive(Error, Debug)]
pub enum ChatStatsError {
    /// File I/O errors (missing or unreadable transcript)
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A timestamp field could not be parsed
    #[error("Invalid timestamp '{input}': {reason}")]
    Timestamp {
        /// The timestamp string as it appeared in the transcript
        input: String,
        /// What made the timestamp unparseable
        reason: String,
    },

    /// A regular expression failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience type alias for Result with `ChatStatsError`
pub type Result<T> = std::result::Result<T, ChatStatsError>;
