//! Output formatting utilities.

use colored::Colorize;
use myhealth_calc::{RenderedRow, ResultRow};
use myhealth_core::{LabelKey, LabelLookup};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> CliResult<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// One calculator output row for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct LabeledValue {
    #[tabled(skip)]
    pub key: &'static str,
    #[tabled(rename = "Metric")]
    pub label: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl LabeledValue {
    /// Resolves a calculator row against a label table.
    pub fn from_row(row: &ResultRow, labels: &dyn LabelLookup) -> Self {
        let RenderedRow { label, value } = row.render(labels);
        Self {
            key: row.label.as_str(),
            label,
            value,
        }
    }
}

/// Prints calculator rows under `title`.
///
/// Row order is preserved in every format. `Minimal` prints only the value
/// of the `headline` row.
pub fn print_rows(
    title: &str,
    rows: &[ResultRow],
    labels: &dyn LabelLookup,
    headline: LabelKey,
    format: OutputFormat,
) -> CliResult<()> {
    let values: Vec<LabeledValue> = rows
        .iter()
        .map(|row| LabeledValue::from_row(row, labels))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(title);
            print_output(&values, format)
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&values, format),
        OutputFormat::Minimal => {
            if let Some(row) = rows.iter().find(|r| r.label == headline) {
                println!("{}", row.formatted());
            }
            Ok(())
        }
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;
    use myhealth_config::LabelTable;
    use rust_decimal::Decimal;

    #[test]
    fn test_labeled_value_from_row() {
        let row = ResultRow::new(LabelKey::BondYtm, Decimal::new(125, 1), 2);
        let value = LabeledValue::from_row(&row, &LabelTable::english());
        assert_eq!(value.key, "bond_ytm");
        assert_eq!(value.label, "Yield to maturity, % p.a.");
        assert_eq!(value.value, "12.50");
    }
}
