//! Error types for the beadbox crate

use thiserror::Error;

/// Main error type for the beadbox crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid adversary policy '{input}'. Expected one of: {expected}")]
    ParseAdversary { input: String, expected: String },

    #[error("invalid game family '{input}'. Expected one of: {expected}")]
    ParseGameFamily { input: String, expected: String },

    #[error("invalid move set '{input}': {reason}")]
    ParseMoveSet { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
