//! Error types for Lexis.
//!
//! All fallible operations in the crate return [`Result`], whose error type is
//! [`LexisError`]. Absence of a match is never reported as an error: lookups
//! return `None`, an empty list, or [`MatchResult::Unknown`](crate::resolve::MatchResult::Unknown).

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// A token position outside `[0, len)` was passed to the resolver.
    #[error("Token index {index} out of range for a sequence of {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid argument provided by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A record referenced by id does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collaborator (vocabulary source, sink or metadata source) failed.
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Lexis operations.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        LexisError::IndexOutOfRange { index, len }
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidArgument(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidConfig(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexisError::NotFound(msg.into())
    }

    pub fn collaborator<S: Into<String>>(msg: S) -> Self {
        LexisError::Collaborator(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = LexisError::index_out_of_range(5, 1);
        assert_eq!(
            err.to_string(),
            "Token index 5 out of range for a sequence of 1 tokens"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LexisError = io.into();
        assert!(matches!(err, LexisError::Io(_)));
    }
}
