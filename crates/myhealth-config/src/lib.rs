//! MyHealth Configuration Layer
//!
//! Application settings and the label tables used to render calculator
//! output. Label text is configuration, not code: calculators emit
//! [`LabelKey`](myhealth_core::LabelKey)s and a [`LabelTable`] chosen at
//! startup turns them into words.
//!
//! # Features
//!
//! - **Locales**: built-in Russian and English tables
//! - **Label overrides**: TOML files replacing any subset of labels
//! - **Settings**: default locale, output format and date style, read from TOML
//!
//! # Example
//!
//! ```rust
//! use myhealth_config::{LabelTable, Locale};
//! use myhealth_core::{LabelKey, LabelLookup};
//!
//! let table = LabelTable::from_toml_str(r#"
//!     base = "en"
//!
//!     [labels]
//!     bond_ytm = "Annual yield, %"
//! "#).unwrap();
//!
//! assert_eq!(table.locale(), Locale::En);
//! assert_eq!(table.label(LabelKey::BondYtm), "Annual yield, %");
//! assert_eq!(table.label(LabelKey::BondDaysToMaturity), "Days to maturity");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod labels;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use labels::{LabelTable, Locale};
pub use settings::{AppConfig, DateStyle, DisplayFormat};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::labels::{LabelTable, Locale};
    pub use crate::settings::{AppConfig, DateStyle, DisplayFormat};
}
