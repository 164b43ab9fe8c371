//! Error types for the CLI

use abacus::core::CalcError;
use abacus::entry::KeyError;
use abacus::recorder::RecordError;
use abacus::storage::StorageError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Arithmetic failure
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),

    /// History persistence failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Unknown keypad key
    #[error(transparent)]
    Key(#[from] KeyError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<RecordError> for CliError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Calculation(e) => Self::Calculation(e),
            RecordError::Storage(e) => Self::Storage(e),
        }
    }
}
