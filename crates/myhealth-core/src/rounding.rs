//! Decimal rounding and fixed-point formatting.
//!
//! All display rounding in MyHealth is half away from zero, which agrees with
//! the `Math.round` and `toFixed` behavior users see in the browser for the
//! positive quantities these calculators produce.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `dp` decimal places, half away from zero.
///
/// A result that rounds to zero is returned without a negative sign.
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.abs()
    } else {
        rounded
    }
}

/// Rounds `value` to the nearest integer, half away from zero.
#[must_use]
pub fn round_to_integer(value: Decimal) -> Decimal {
    round_dp(value, 0)
}

/// Formats `value` with exactly `dp` decimal places.
///
/// ```rust
/// use myhealth_core::rounding::format_fixed;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_fixed(dec!(12.5), 2), "12.50");
/// assert_eq!(format_fixed(dec!(104.4), 0), "104");
/// ```
#[must_use]
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    format!("{:.prec$}", round_dp(value, dp), prec = dp as usize)
}
