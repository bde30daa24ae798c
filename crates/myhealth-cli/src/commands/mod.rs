//! CLI command implementations.

pub mod bond;
pub mod calories;
pub mod config;
pub mod exec;
pub mod labels;

pub use bond::BondArgs;
pub use calories::CaloriesArgs;
pub use config::ConfigArgs;
pub use exec::ExecArgs;
pub use labels::LabelsArgs;

use std::path::PathBuf;

use myhealth_config::{AppConfig, DateStyle, LabelTable};
use myhealth_core::Date;
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings resolved from the command line and the configuration file.
pub struct Context {
    /// Effective output format.
    pub format: OutputFormat,
    /// Label table for rendering.
    pub labels: LabelTable,
    /// Date rendering.
    pub date_style: DateStyle,
    /// Suppress informational lines.
    pub quiet: bool,
    /// Configuration file in effect.
    pub config_path: PathBuf,
    /// Loaded configuration.
    pub config: AppConfig,
}

/// Parses a date in YYYY-MM-DD or DD.MM.YYYY format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a decimal number, accepting a comma as decimal separator.
pub fn parse_decimal(s: &str) -> CliResult<Decimal> {
    s.trim()
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| CliError::InvalidNumber(s.to_string()))
}
