//! # MyHealth Core
//!
//! Core types shared by the MyHealth calculators and their front ends.
//!
//! - **Types**: `Date`, `Gender`, and the closed set of display labels (`LabelKey`)
//! - **Rounding**: half-away-from-zero decimal rounding and fixed-point formatting
//! - **Labels**: the `LabelLookup` seam through which translated strings are resolved
//!
//! ## Example
//!
//! ```rust
//! use myhealth_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let maturity = Date::parse("2026-03-01").unwrap();
//! let today = Date::from_ymd(2025, 3, 1).unwrap();
//! assert_eq!(today.days_between(&maturity), 365);
//!
//! assert_eq!(format_fixed(dec!(1345.25), 2), "1345.25");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod labels;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::labels::{KeyLabels, LabelKey, LabelLookup};
    pub use crate::rounding::{format_fixed, round_dp, round_to_integer};
    pub use crate::types::{Date, Gender};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use labels::{KeyLabels, LabelKey, LabelLookup};
pub use types::{Date, Gender};
