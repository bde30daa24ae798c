//! Property-based tests for calculator invariants.
//!
//! - Bought sum equals bought count times total price, exactly
//! - Difference equals total sum minus bought sum, exactly
//! - Maturity on or before the evaluation date never yields a result
//! - Repeated evaluation is bit-identical

use myhealth_calc::prelude::*;
use myhealth_core::{Date, Gender};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Currency amount with kopeck precision in `[0.01, max]`.
fn amount(max_units: i64) -> impl Strategy<Value = Decimal> {
    (1i64..=max_units * 100).prop_map(|cents| Decimal::new(cents, 2))
}

fn non_negative_amount(max_units: i64) -> impl Strategy<Value = Decimal> {
    (0i64..=max_units * 100).prop_map(|cents| Decimal::new(cents, 2))
}

fn evaluation_date() -> impl Strategy<Value = Date> {
    (0i64..20_000).prop_map(|offset| Date::from_ymd(1990, 1, 1).unwrap().add_days(offset))
}

fn bond_inputs() -> impl Strategy<Value = (BondInputs, Date)> {
    (
        amount(10_000),
        amount(10_000),
        non_negative_amount(500),
        non_negative_amount(500),
        0u32..40,
        amount(10_000_000),
        evaluation_date(),
        1i64..15_000,
    )
        .prop_map(
            |(nominal, price, ncd, coupon_amount, coupon_count, investable_sum, today, days)| {
                (
                    BondInputs {
                        nominal,
                        price,
                        maturity_date: today.add_days(days),
                        ncd,
                        coupon_amount,
                        coupon_count,
                        investable_sum,
                    },
                    today,
                )
            },
        )
}

fn biometric_inputs() -> impl Strategy<Value = BiometricInputs> {
    (
        prop_oneof![Just(Gender::Male), Just(Gender::Female)],
        (300i64..3_000).prop_map(|w| Decimal::new(w, 1)),
        (500i64..2_500).prop_map(|h| Decimal::new(h, 1)),
        1u32..110,
    )
        .prop_map(|(gender, weight, height, age)| {
            BiometricInputs::new(gender, weight, height, age).unwrap()
        })
}

// =============================================================================
// BOND PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn bought_sum_is_count_times_total_price((inputs, today) in bond_inputs()) {
        let result = BondYieldCalculator::compute(&inputs, today).unwrap();
        prop_assert_eq!(
            result.total_bought_sum,
            result.total_bought_count * (inputs.price + inputs.ncd)
        );
    }

    #[test]
    fn diff_is_total_minus_bought((inputs, today) in bond_inputs()) {
        let result = BondYieldCalculator::compute(&inputs, today).unwrap();
        prop_assert_eq!(result.diff_sum, result.total_sum - result.total_bought_sum);
    }

    #[test]
    fn bought_count_is_a_whole_number((inputs, today) in bond_inputs()) {
        let result = BondYieldCalculator::compute(&inputs, today).unwrap();
        prop_assert_eq!(result.total_bought_count.fract(), Decimal::ZERO);
        prop_assert!(result.total_bought_count >= Decimal::ZERO);
    }

    #[test]
    fn days_to_maturity_is_positive((inputs, today) in bond_inputs()) {
        let result = BondYieldCalculator::compute(&inputs, today).unwrap();
        prop_assert_eq!(result.days_to_maturity, today.days_between(&inputs.maturity_date));
        prop_assert!(result.days_to_maturity >= 1);
    }

    #[test]
    fn matured_bonds_are_rejected((inputs, today) in bond_inputs(), back in 0i64..5_000) {
        let mut expired = inputs;
        expired.maturity_date = today.add_days(-back);
        let is_date_error = matches!(
            BondYieldCalculator::compute(&expired, today),
            Err(CalcError::DateNotInFuture { .. })
        );
        prop_assert!(is_date_error);
    }

    #[test]
    fn bond_computation_is_idempotent((inputs, today) in bond_inputs()) {
        let first = BondYieldCalculator::compute(&inputs, today).unwrap();
        let second = BondYieldCalculator::compute(&inputs, today).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.rows(), second.rows());
    }
}

// =============================================================================
// CALORIE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn six_rows_in_tier_order(inputs in biometric_inputs()) {
        let result = CalorieNeedCalculator::compute(&inputs);
        let levels: Vec<_> = result.levels.iter().map(|n| n.level).collect();
        prop_assert_eq!(levels.as_slice(), ActivityLevel::all());
        prop_assert_eq!(result.rows().len(), 6);
    }

    #[test]
    fn basal_row_is_rounded_bmr(inputs in biometric_inputs()) {
        let result = CalorieNeedCalculator::compute(&inputs);
        let basal = result.need(ActivityLevel::Basal).unwrap();
        prop_assert_eq!(basal, myhealth_core::rounding::round_dp(result.bmr, 2));
    }

    #[test]
    fn calorie_computation_is_idempotent(inputs in biometric_inputs()) {
        prop_assert_eq!(
            CalorieNeedCalculator::compute(&inputs),
            CalorieNeedCalculator::compute(&inputs)
        );
    }
}
