//! Error types for record parsing.

use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while reading taxonomy files.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not match the expected record layout.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The input ended before a required header or edge was read.
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

impl ParseError {
    /// Creates a malformed-line error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
