//! Error types for the core primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for parsing and constructing core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid calendar date or unparseable date text.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Gender text that is neither male nor female.
    #[error("Invalid gender: {value} (expected m or f)")]
    InvalidGender {
        /// The rejected input.
        value: String,
    },

    /// Label identifier that does not name any `LabelKey`.
    #[error("Unknown label: {key}")]
    UnknownLabel {
        /// The rejected identifier.
        key: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid gender error.
    #[must_use]
    pub fn invalid_gender(value: impl Into<String>) -> Self {
        Self::InvalidGender {
            value: value.into(),
        }
    }

    /// Creates an unknown label error.
    #[must_use]
    pub fn unknown_label(key: impl Into<String>) -> Self {
        Self::UnknownLabel { key: key.into() }
    }
}
