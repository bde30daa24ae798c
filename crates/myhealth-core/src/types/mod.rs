//! Domain types.
//!
//! - [`Date`]: Calendar date with day-resolution arithmetic
//! - [`Gender`]: Biological sex used by the metabolic formulas

mod date;
mod gender;

pub use date::Date;
pub use gender::Gender;
