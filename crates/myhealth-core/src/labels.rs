//! Display label identifiers.
//!
//! Calculators tag every output row with a [`LabelKey`]. Turning a key into
//! user-facing text is the job of a [`LabelLookup`] implementation supplied by
//! the caller, so translated strings never live in calculation code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Identifier of a displayable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    /// Title of the bond yield calculator.
    BondCalcTitle,
    /// Bond nominal (face) value input.
    BondNominal,
    /// Current clean price input.
    BondPrice,
    /// Maturity date input.
    BondMaturityDate,
    /// Accrued coupon interest (NCD) input.
    BondNcd,
    /// Coupon payment amount (CD) input.
    BondCouponAmount,
    /// Number of remaining coupon payments input.
    BondCouponCount,
    /// Investable sum input.
    BondInvestableSum,
    /// Number of bonds bought.
    BondTotalBoughtCount,
    /// Total purchase cost.
    BondTotalBoughtSum,
    /// Calendar days until maturity.
    BondDaysToMaturity,
    /// Simple annualized yield to maturity, percent.
    BondYtm,
    /// Total redemption sum including coupons.
    BondTotalSum,
    /// Profit or loss at maturity.
    BondDiffSum,
    /// Title of the calorie need calculator.
    CalorieCalcTitle,
    /// Gender input.
    BiometricGender,
    /// Body weight input.
    BiometricWeight,
    /// Height input.
    BiometricHeight,
    /// Age input.
    BiometricAge,
    /// Basal metabolic rate.
    CalorieBmr,
    /// Sedentary activity tier.
    CalorieSedentary,
    /// Light activity tier.
    CalorieLight,
    /// Moderate activity tier.
    CalorieModerate,
    /// Active tier.
    CalorieActive,
    /// Super-active tier.
    CalorieSuperActive,
    /// Chat reply to a command that does not parse.
    ChatInvalidCommand,
    /// Heading of the chat command list.
    ChatHelpTitle,
    /// Chat help entry for the calorie calculator.
    ChatHelpCalorie,
    /// Chat help entry for the bond calculator.
    ChatHelpBond,
    /// Name of the `c` (calculate) chat action.
    ChatActionCalc,
    /// Argument type: decimal greater than zero.
    ChatTypePositive,
    /// Argument type: decimal zero or greater.
    ChatTypeNonNegative,
    /// Argument type: whole number greater than zero.
    ChatTypePositiveInteger,
    /// Argument type: whole number zero or greater.
    ChatTypeCount,
    /// Argument type: date.
    ChatTypeDate,
}

impl LabelKey {
    /// Returns the stable snake_case identifier used in label files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BondCalcTitle => "bond_calc_title",
            Self::BondNominal => "bond_nominal",
            Self::BondPrice => "bond_price",
            Self::BondMaturityDate => "bond_maturity_date",
            Self::BondNcd => "bond_ncd",
            Self::BondCouponAmount => "bond_coupon_amount",
            Self::BondCouponCount => "bond_coupon_count",
            Self::BondInvestableSum => "bond_investable_sum",
            Self::BondTotalBoughtCount => "bond_total_bought_count",
            Self::BondTotalBoughtSum => "bond_total_bought_sum",
            Self::BondDaysToMaturity => "bond_days_to_maturity",
            Self::BondYtm => "bond_ytm",
            Self::BondTotalSum => "bond_total_sum",
            Self::BondDiffSum => "bond_diff_sum",
            Self::CalorieCalcTitle => "calorie_calc_title",
            Self::BiometricGender => "biometric_gender",
            Self::BiometricWeight => "biometric_weight",
            Self::BiometricHeight => "biometric_height",
            Self::BiometricAge => "biometric_age",
            Self::CalorieBmr => "calorie_bmr",
            Self::CalorieSedentary => "calorie_sedentary",
            Self::CalorieLight => "calorie_light",
            Self::CalorieModerate => "calorie_moderate",
            Self::CalorieActive => "calorie_active",
            Self::CalorieSuperActive => "calorie_super_active",
            Self::ChatInvalidCommand => "chat_invalid_command",
            Self::ChatHelpTitle => "chat_help_title",
            Self::ChatHelpCalorie => "chat_help_calorie",
            Self::ChatHelpBond => "chat_help_bond",
            Self::ChatActionCalc => "chat_action_calc",
            Self::ChatTypePositive => "chat_type_positive",
            Self::ChatTypeNonNegative => "chat_type_non_negative",
            Self::ChatTypePositiveInteger => "chat_type_positive_integer",
            Self::ChatTypeCount => "chat_type_count",
            Self::ChatTypeDate => "chat_type_date",
        }
    }

    /// Parses a snake_case identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownLabel` if no key has that identifier.
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::unknown_label(s))
    }

    /// All keys in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::BondCalcTitle,
            Self::BondNominal,
            Self::BondPrice,
            Self::BondMaturityDate,
            Self::BondNcd,
            Self::BondCouponAmount,
            Self::BondCouponCount,
            Self::BondInvestableSum,
            Self::BondTotalBoughtCount,
            Self::BondTotalBoughtSum,
            Self::BondDaysToMaturity,
            Self::BondYtm,
            Self::BondTotalSum,
            Self::BondDiffSum,
            Self::CalorieCalcTitle,
            Self::BiometricGender,
            Self::BiometricWeight,
            Self::BiometricHeight,
            Self::BiometricAge,
            Self::CalorieBmr,
            Self::CalorieSedentary,
            Self::CalorieLight,
            Self::CalorieModerate,
            Self::CalorieActive,
            Self::CalorieSuperActive,
            Self::ChatInvalidCommand,
            Self::ChatHelpTitle,
            Self::ChatHelpCalorie,
            Self::ChatHelpBond,
            Self::ChatActionCalc,
            Self::ChatTypePositive,
            Self::ChatTypeNonNegative,
            Self::ChatTypePositiveInteger,
            Self::ChatTypeCount,
            Self::ChatTypeDate,
        ]
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolves label keys to display text.
pub trait LabelLookup {
    /// Returns the display text for `key`.
    fn label(&self, key: LabelKey) -> &str;
}

/// Identity lookup: every key renders as its identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLabels;

impl LabelLookup for KeyLabels {
    fn label(&self, key: LabelKey) -> &str {
        key.as_str()
    }
}
