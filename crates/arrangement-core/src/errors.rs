//! Arrangement Errors
//!
//! Error types for the arrangement search.

use thiserror::Error;

/// Result type for arrangement operations
pub type ArrangementResult<T> = Result<T, ArrangementError>;

/// Arrangement errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrangementError {
    /// The bound (or a triple parameter) is not a positive integer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArrangementError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ArrangementError::InvalidArgument(reason.into())
    }
}
