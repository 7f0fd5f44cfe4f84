//! CLI Errors
//!
//! Error types for the arrangement command line.

use arrangement_core::ArrangementError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Bound rejected by the search
    #[error(transparent)]
    Arrangement(#[from] ArrangementError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// Stdin closed before a bound was entered
    #[error("No bound was entered")]
    NoInput,
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e.to_string())
    }
}
