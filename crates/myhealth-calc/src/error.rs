//! Calculator error types.

use myhealth_core::Date;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Validation and arithmetic failures raised before any result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The bond matures on or before the evaluation date.
    #[error("maturity date {maturity} must be after evaluation date {evaluation}")]
    DateNotInFuture {
        /// Bond maturity date.
        maturity: Date,
        /// Date the calculation is evaluated at.
        evaluation: Date,
    },

    /// A quantity that must be positive (or non-negative) is out of range.
    #[error("{field} must be positive, got {value}")]
    NonPositiveValue {
        /// Input field name.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Zero-length holding period; the annualized yield is undefined.
    #[error("days to maturity is zero, yield is undefined")]
    ZeroDaysToMaturity,

    /// Decimal overflow while evaluating a formula step.
    #[error("arithmetic overflow computing {step}")]
    Overflow {
        /// Formula step that overflowed.
        step: &'static str,
    },
}

impl CalcError {
    /// Creates a non-positive value error.
    #[must_use]
    pub fn non_positive(field: &'static str, value: Decimal) -> Self {
        Self::NonPositiveValue { field, value }
    }

    /// Returns true for input validation failures, as opposed to arithmetic ones.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DateNotInFuture { .. } | Self::NonPositiveValue { .. } | Self::ZeroDaysToMaturity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CalcError::non_positive("price", dec!(-1));
        assert_eq!(err.to_string(), "price must be positive, got -1");
        assert!(err.is_validation());
    }

    #[test]
    fn test_date_error_display() {
        let d = Date::from_ymd(2025, 1, 1).unwrap();
        let err = CalcError::DateNotInFuture {
            maturity: d,
            evaluation: d,
        };
        assert!(err.to_string().contains("2025-01-01"));
        assert!(!CalcError::Overflow { step: "ytm" }.is_validation());
    }
}
