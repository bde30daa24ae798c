//! Ordered, labeled result rows.

use myhealth_core::rounding::format_fixed;
use myhealth_core::{LabelKey, LabelLookup};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labeled output value with its display precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Label identifier.
    pub label: LabelKey,
    /// Unformatted value.
    pub value: Decimal,
    /// Number of decimals shown.
    pub precision: u32,
}

impl ResultRow {
    /// Creates a row.
    #[must_use]
    pub fn new(label: LabelKey, value: Decimal, precision: u32) -> Self {
        Self {
            label,
            value,
            precision,
        }
    }

    /// Value rendered with exactly `precision` decimals.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_fixed(self.value, self.precision)
    }

    /// Resolves the label and formats the value.
    #[must_use]
    pub fn render(&self, labels: &dyn LabelLookup) -> RenderedRow {
        RenderedRow {
            label: labels.label(self.label).to_string(),
            value: self.formatted(),
        }
    }
}

/// A (label, formatted value) pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedRow {
    /// Display label.
    pub label: String,
    /// Formatted value.
    pub value: String,
}

/// Renders rows in order.
#[must_use]
pub fn render_rows(rows: &[ResultRow], labels: &dyn LabelLookup) -> Vec<RenderedRow> {
    rows.iter().map(|row| row.render(labels)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use myhealth_core::KeyLabels;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_keeps_order_and_precision() {
        let rows = [
            ResultRow::new(LabelKey::BondTotalBoughtCount, dec!(104), 0),
            ResultRow::new(LabelKey::BondYtm, dec!(12.5), 2),
        ];
        let rendered = render_rows(&rows, &KeyLabels);
        assert_eq!(rendered[0].label, "bond_total_bought_count");
        assert_eq!(rendered[0].value, "104");
        assert_eq!(rendered[1].value, "12.50");
    }
}
