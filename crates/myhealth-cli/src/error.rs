//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD or DD.MM.YYYY.")]
    InvalidDate(String),

    /// Invalid decimal number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Calculation rejected its inputs.
    #[error("{0}")]
    Calculation(#[from] myhealth_calc::CalcError),

    /// Chat command was not understood or failed.
    #[error("{0}")]
    Chat(#[from] crate::chat::ChatError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] myhealth_config::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
