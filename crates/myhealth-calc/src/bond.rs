//! Bond yield-to-maturity calculator.
//!
//! Estimates the outcome of buying a bond position with a fixed sum and
//! holding it to redemption.
//!
//! # Formula
//!
//! ```text
//! total price   = price + NCD
//! coupon sum    = CD * coupon count
//! bought count  = round(investable sum / total price)
//! bought sum    = bought count * total price
//! days          = maturity - evaluation date (calendar days)
//! YTM, %        = (nominal + coupon sum - total price) / total price * 365 / days * 100
//! total sum     = bought count * (nominal + coupon sum)
//! difference    = total sum - bought sum
//! ```

use myhealth_core::rounding::round_to_integer;
use myhealth_core::{Date, LabelKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::rows::ResultRow;

/// Days per year used to annualize the holding-period return.
const DAYS_PER_YEAR: Decimal = dec!(365);

/// Purchase economics of a bond position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondInputs {
    /// Nominal (face) value redeemed at maturity.
    pub nominal: Decimal,
    /// Current clean price.
    pub price: Decimal,
    /// Maturity date.
    pub maturity_date: Date,
    /// Accrued coupon interest paid on purchase (NCD).
    pub ncd: Decimal,
    /// Amount of one coupon payment (CD).
    pub coupon_amount: Decimal,
    /// Number of coupon payments until maturity.
    pub coupon_count: u32,
    /// Sum available for the purchase.
    pub investable_sum: Decimal,
}

impl BondInputs {
    /// Checks field ranges and the maturity rule against `evaluation_date`.
    ///
    /// Nominal, price and investable sum must be positive; NCD and coupon
    /// amount must not be negative; maturity must be strictly after the
    /// evaluation date.
    pub fn validate(&self, evaluation_date: Date) -> CalcResult<()> {
        for (field, value) in [
            ("nominal", self.nominal),
            ("price", self.price),
            ("investable_sum", self.investable_sum),
        ] {
            if value <= Decimal::ZERO {
                return Err(CalcError::non_positive(field, value));
            }
        }

        for (field, value) in [("ncd", self.ncd), ("coupon_amount", self.coupon_amount)] {
            if value < Decimal::ZERO {
                return Err(CalcError::non_positive(field, value));
            }
        }

        if self.maturity_date <= evaluation_date {
            return Err(CalcError::DateNotInFuture {
                maturity: self.maturity_date,
                evaluation: evaluation_date,
            });
        }

        Ok(())
    }
}

/// Outcome of a bond position held to maturity.
///
/// Values are kept unrounded; display precision is applied by [`BondResult::rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondResult {
    /// Price paid per bond including NCD.
    pub total_price: Decimal,
    /// Sum of remaining coupon payments per bond.
    pub coupon_sum: Decimal,
    /// Number of bonds bought (integer valued).
    pub total_bought_count: Decimal,
    /// Total cost of the bought bonds.
    pub total_bought_sum: Decimal,
    /// Calendar days from evaluation to maturity.
    pub days_to_maturity: i64,
    /// Simple annualized yield to maturity, in percent.
    pub ytm: Decimal,
    /// Total received at maturity: redemption plus coupons.
    pub total_sum: Decimal,
    /// Profit (positive) or loss (negative) at maturity.
    pub diff_sum: Decimal,
}

impl BondResult {
    /// The six display rows, in their fixed order.
    #[must_use]
    pub fn rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new(LabelKey::BondTotalBoughtCount, self.total_bought_count, 0),
            ResultRow::new(LabelKey::BondTotalBoughtSum, self.total_bought_sum, 2),
            ResultRow::new(
                LabelKey::BondDaysToMaturity,
                Decimal::from(self.days_to_maturity),
                0,
            ),
            ResultRow::new(LabelKey::BondYtm, self.ytm, 2),
            ResultRow::new(LabelKey::BondTotalSum, self.total_sum, 2),
            ResultRow::new(LabelKey::BondDiffSum, self.diff_sum, 2),
        ]
    }
}

/// Bond yield-to-maturity calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondYieldCalculator;

impl BondYieldCalculator {
    /// Validates `inputs` and computes the position outcome at `evaluation_date`.
    ///
    /// # Errors
    ///
    /// - `CalcError::NonPositiveValue` for out-of-range amounts
    /// - `CalcError::DateNotInFuture` if maturity is not after `evaluation_date`
    /// - `CalcError::Overflow` if an intermediate exceeds the decimal range
    pub fn compute(inputs: &BondInputs, evaluation_date: Date) -> CalcResult<BondResult> {
        inputs.validate(evaluation_date)?;

        let total_price = step("total_price", inputs.price.checked_add(inputs.ncd))?;
        let coupon_sum = step(
            "coupon_sum",
            inputs
                .coupon_amount
                .checked_mul(Decimal::from(inputs.coupon_count)),
        )?;

        let total_bought_count = round_to_integer(step(
            "total_bought_count",
            inputs.investable_sum.checked_div(total_price),
        )?);
        let total_bought_sum = step(
            "total_bought_sum",
            total_bought_count.checked_mul(total_price),
        )?;

        let days_to_maturity = evaluation_date.days_between(&inputs.maturity_date).abs();
        if days_to_maturity == 0 {
            return Err(CalcError::ZeroDaysToMaturity);
        }

        let redemption = step("redemption", inputs.nominal.checked_add(coupon_sum))?;
        let ytm = annualized_yield(redemption, total_price, days_to_maturity)?;

        let total_sum = step("total_sum", total_bought_count.checked_mul(redemption))?;
        let diff_sum = step("diff_sum", total_sum.checked_sub(total_bought_sum))?;

        log::debug!(
            "bond yield: price={} ncd={} days={} -> count={} ytm={}",
            inputs.price,
            inputs.ncd,
            days_to_maturity,
            total_bought_count,
            ytm
        );

        Ok(BondResult {
            total_price,
            coupon_sum,
            total_bought_count,
            total_bought_sum,
            days_to_maturity,
            ytm,
            total_sum,
            diff_sum,
        })
    }
}

/// Computes the bond yield outcome; see [`BondYieldCalculator::compute`].
pub fn compute_bond_yield(inputs: &BondInputs, evaluation_date: Date) -> CalcResult<BondResult> {
    BondYieldCalculator::compute(inputs, evaluation_date)
}

/// `(redemption - cost) / cost * 365 / days * 100`, evaluated with a single division.
fn annualized_yield(redemption: Decimal, cost: Decimal, days: i64) -> CalcResult<Decimal> {
    let gain = step("ytm", redemption.checked_sub(cost))?;
    let numerator = step(
        "ytm",
        gain.checked_mul(DAYS_PER_YEAR)
            .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED)),
    )?;
    let denominator = step("ytm", cost.checked_mul(Decimal::from(days)))?;
    step("ytm", numerator.checked_div(denominator))
}

fn step(name: &'static str, value: Option<Decimal>) -> CalcResult<Decimal> {
    value.ok_or(CalcError::Overflow { step: name })
}
