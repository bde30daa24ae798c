//! # MyHealth Calculators
//!
//! Two independent, stateless calculators:
//!
//! - [`BondYieldCalculator`]: purchase cost, days to maturity, simple annualized
//!   yield and total return of a bond position
//! - [`CalorieNeedCalculator`]: basal metabolic rate (Mifflin-St Jeor) and the
//!   daily calorie need at five activity tiers
//!
//! Both return their figures as an ordered list of [`ResultRow`]s whose order
//! is part of the contract: front ends render rows exactly as given.
//!
//! ## Example
//!
//! ```rust
//! use myhealth_calc::prelude::*;
//! use myhealth_core::{Date, Gender};
//! use rust_decimal_macros::dec;
//!
//! let today = Date::from_ymd(2025, 1, 1).unwrap();
//! let inputs = BondInputs {
//!     nominal: dec!(1000),
//!     price: dec!(950),
//!     maturity_date: today.add_days(365),
//!     ncd: dec!(10),
//!     coupon_amount: dec!(40),
//!     coupon_count: 2,
//!     investable_sum: dec!(100000),
//! };
//! let bond = BondYieldCalculator::compute(&inputs, today).unwrap();
//! assert_eq!(bond.ytm, dec!(12.5));
//!
//! let person = BiometricInputs::new(Gender::Male, dec!(80), dec!(180), 30).unwrap();
//! let need = CalorieNeedCalculator::compute(&person);
//! assert_eq!(need.bmr, dec!(1780));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod bond;
pub mod calories;
pub mod error;
pub mod rows;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{compute_bond_yield, BondInputs, BondResult, BondYieldCalculator};
    pub use crate::calories::{
        compute_calorie_need, ActivityLevel, ActivityNeed, BiometricInputs, CalorieNeedCalculator,
        CalorieResult,
    };
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::rows::{render_rows, RenderedRow, ResultRow};
}

pub use bond::{compute_bond_yield, BondInputs, BondResult, BondYieldCalculator};
pub use calories::{
    compute_calorie_need, ActivityLevel, ActivityNeed, BiometricInputs, CalorieNeedCalculator,
    CalorieResult,
};
pub use error::{CalcError, CalcResult};
pub use rows::{render_rows, RenderedRow, ResultRow};
