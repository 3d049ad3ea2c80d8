//! Error types for query construction.

use thiserror::Error;

/// A specialized Result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building a query from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The ride type is not one of the known intents.
    #[error("unknown ride type: {value} (expected driving or looking)")]
    InvalidIntent {
        /// The unrecognized value.
        value: String,
    },
}

impl QueryError {
    /// Creates an invalid intent error.
    pub fn invalid_intent(value: impl Into<String>) -> Self {
        QueryError::InvalidIntent {
            value: value.into(),
        }
    }
}
