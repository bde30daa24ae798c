//! Daily calorie need calculator.
//!
//! Basal metabolic rate follows the Mifflin-St Jeor equation:
//!
//! ```text
//! BMR = 10 * weight(kg) + 6.25 * height(cm) - 5 * age(years) + s
//! s   = +5 for men, -161 for women
//! ```
//!
//! Daily need at an activity tier is `BMR * factor`.

use myhealth_core::rounding::round_dp;
use myhealth_core::{Gender, LabelKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::rows::ResultRow;

/// Decimals kept on calorie values.
const CALORIE_PRECISION: u32 = 2;

/// Activity tier and its BMR multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// At rest (factor 1.0).
    Basal,
    /// Little or no exercise (1.2).
    Sedentary,
    /// Light exercise 1-3 days a week (1.375).
    Light,
    /// Moderate exercise 3-5 days a week (1.55).
    Moderate,
    /// Hard exercise 6-7 days a week (1.725).
    Active,
    /// Very hard exercise or physical job (1.9).
    SuperActive,
}

impl ActivityLevel {
    /// BMR multiplier.
    #[must_use]
    pub fn factor(&self) -> Decimal {
        match self {
            Self::Basal => Decimal::ONE,
            Self::Sedentary => dec!(1.2),
            Self::Light => dec!(1.375),
            Self::Moderate => dec!(1.55),
            Self::Active => dec!(1.725),
            Self::SuperActive => dec!(1.9),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> LabelKey {
        match self {
            Self::Basal => LabelKey::CalorieBmr,
            Self::Sedentary => LabelKey::CalorieSedentary,
            Self::Light => LabelKey::CalorieLight,
            Self::Moderate => LabelKey::CalorieModerate,
            Self::Active => LabelKey::CalorieActive,
            Self::SuperActive => LabelKey::CalorieSuperActive,
        }
    }

    /// All tiers, from rest to super-active.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Basal,
            Self::Sedentary,
            Self::Light,
            Self::Moderate,
            Self::Active,
            Self::SuperActive,
        ]
    }
}

/// Validated biometric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiometricInputs {
    gender: Gender,
    weight_kg: Decimal,
    height_cm: Decimal,
    age_years: u32,
}

impl BiometricInputs {
    /// Creates inputs, rejecting zero or negative quantities.
    pub fn new(
        gender: Gender,
        weight_kg: Decimal,
        height_cm: Decimal,
        age_years: u32,
    ) -> CalcResult<Self> {
        if weight_kg <= Decimal::ZERO {
            return Err(CalcError::non_positive("weight", weight_kg));
        }
        if height_cm <= Decimal::ZERO {
            return Err(CalcError::non_positive("height", height_cm));
        }
        if age_years == 0 {
            return Err(CalcError::non_positive("age", Decimal::ZERO));
        }

        Ok(Self {
            gender,
            weight_kg,
            height_cm,
            age_years,
        })
    }

    /// Gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Body weight, kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Height, centimeters.
    #[must_use]
    pub fn height_cm(&self) -> Decimal {
        self.height_cm
    }

    /// Age, whole years.
    #[must_use]
    pub fn age_years(&self) -> u32 {
        self.age_years
    }
}

/// Calorie need at one activity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityNeed {
    /// Tier.
    pub level: ActivityLevel,
    /// Multiplier applied to BMR.
    pub factor: Decimal,
    /// Daily calories, rounded to 2 decimals.
    pub calories: Decimal,
}

/// Basal metabolic rate and the need at every activity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Unrounded basal metabolic rate, kcal/day.
    pub bmr: Decimal,
    /// One entry per [`ActivityLevel`], in [`ActivityLevel::all`] order.
    pub levels: Vec<ActivityNeed>,
}

impl CalorieResult {
    /// Need at a given tier.
    #[must_use]
    pub fn need(&self, level: ActivityLevel) -> Option<Decimal> {
        self.levels
            .iter()
            .find(|n| n.level == level)
            .map(|n| n.calories)
    }

    /// The six display rows: BMR first, then each tier.
    #[must_use]
    pub fn rows(&self) -> Vec<ResultRow> {
        self.levels
            .iter()
            .map(|n| ResultRow::new(n.level.label(), n.calories, CALORIE_PRECISION))
            .collect()
    }
}

/// Calorie need calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieNeedCalculator;

impl CalorieNeedCalculator {
    /// Computes BMR and per-tier needs.
    ///
    /// Arithmetic saturates at the decimal range, which no physical input
    /// can reach.
    #[must_use]
    pub fn compute(inputs: &BiometricInputs) -> CalorieResult {
        let bmr = basal_metabolic_rate(inputs);

        let levels = ActivityLevel::all()
            .iter()
            .map(|&level| ActivityNeed {
                level,
                factor: level.factor(),
                calories: round_dp(bmr.saturating_mul(level.factor()), CALORIE_PRECISION),
            })
            .collect();

        log::debug!(
            "calorie need: gender={} weight={} height={} age={} -> bmr={}",
            inputs.gender,
            inputs.weight_kg,
            inputs.height_cm,
            inputs.age_years,
            bmr
        );

        CalorieResult { bmr, levels }
    }
}

/// Computes calorie need; see [`CalorieNeedCalculator::compute`].
#[must_use]
pub fn compute_calorie_need(inputs: &BiometricInputs) -> CalorieResult {
    CalorieNeedCalculator::compute(inputs)
}

fn basal_metabolic_rate(inputs: &BiometricInputs) -> Decimal {
    let base = dec!(10)
        .saturating_mul(inputs.weight_kg)
        .saturating_add(dec!(6.25).saturating_mul(inputs.height_cm))
        .saturating_sub(dec!(5) * Decimal::from(inputs.age_years));

    match inputs.gender {
        Gender::Male => base.saturating_add(dec!(5)),
        Gender::Female => base.saturating_sub(dec!(161)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_reference() {
        let inputs = BiometricInputs::new(Gender::Male, dec!(80), dec!(180), 30).unwrap();
        let result = CalorieNeedCalculator::compute(&inputs);

        assert_eq!(result.bmr, dec!(1780));
        assert_eq!(result.need(ActivityLevel::Basal), Some(dec!(1780.00)));
        assert_eq!(result.need(ActivityLevel::Sedentary), Some(dec!(2136.00)));
        assert_eq!(result.need(ActivityLevel::Light), Some(dec!(2447.50)));
        assert_eq!(result.need(ActivityLevel::Moderate), Some(dec!(2759.00)));
        assert_eq!(result.need(ActivityLevel::Active), Some(dec!(3070.50)));
        assert_eq!(result.need(ActivityLevel::SuperActive), Some(dec!(3382.00)));
    }

    #[test]
    fn test_female_reference() {
        let inputs = BiometricInputs::new(Gender::Female, dec!(60), dec!(165), 25).unwrap();
        let result = compute_calorie_need(&inputs);

        assert_eq!(result.bmr, dec!(1345.25));
        // 1345.25 * 1.375 = 1849.71875
        assert_eq!(result.need(ActivityLevel::Light), Some(dec!(1849.72)));
    }

    #[test]
    fn test_rows_order_and_format() {
        let inputs = BiometricInputs::new(Gender::Male, dec!(80), dec!(180), 30).unwrap();
        let rows = CalorieNeedCalculator::compute(&inputs).rows();

        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                LabelKey::CalorieBmr,
                LabelKey::CalorieSedentary,
                LabelKey::CalorieLight,
                LabelKey::CalorieModerate,
                LabelKey::CalorieActive,
                LabelKey::CalorieSuperActive,
            ]
        );
        assert_eq!(rows[0].formatted(), "1780.00");
        assert_eq!(rows[1].formatted(), "2136.00");
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(matches!(
            BiometricInputs::new(Gender::Male, Decimal::ZERO, dec!(180), 30),
            Err(CalcError::NonPositiveValue { field: "weight", .. })
        ));
        assert!(matches!(
            BiometricInputs::new(Gender::Male, dec!(80), dec!(-1), 30),
            Err(CalcError::NonPositiveValue { field: "height", .. })
        ));
        assert!(matches!(
            BiometricInputs::new(Gender::Female, dec!(80), dec!(180), 0),
            Err(CalcError::NonPositiveValue { field: "age", .. })
        ));
    }

    #[test]
    fn test_gender_offset_is_166() {
        let male = BiometricInputs::new(Gender::Male, dec!(70), dec!(170), 40).unwrap();
        let female = BiometricInputs::new(Gender::Female, dec!(70), dec!(170), 40).unwrap();
        let diff = compute_calorie_need(&male).bmr - compute_calorie_need(&female).bmr;
        assert_eq!(diff, dec!(166));
    }
}
