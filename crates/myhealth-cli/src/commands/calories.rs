//! Calories command implementation.

use clap::Args;
use myhealth_calc::{BiometricInputs, CalorieNeedCalculator};
use myhealth_core::{Gender, LabelKey, LabelLookup};
use rust_decimal::Decimal;

use crate::commands::{parse_decimal, Context};
use crate::error::CliResult;
use crate::output::print_rows;

/// Arguments for the calories command.
#[derive(Args, Debug)]
pub struct CaloriesArgs {
    /// Gender (m, f)
    #[arg(short, long)]
    pub gender: Gender,

    /// Body weight, kg
    #[arg(short, long, value_parser = parse_decimal)]
    pub weight: Decimal,

    /// Height, cm
    #[arg(long, value_parser = parse_decimal)]
    pub height: Decimal,

    /// Age, full years
    #[arg(short, long)]
    pub age: u32,
}

/// Execute the calories command.
pub fn execute(args: CaloriesArgs, ctx: &Context) -> CliResult<()> {
    let inputs = BiometricInputs::new(args.gender, args.weight, args.height, args.age)?;

    tracing::debug!(?inputs, "computing calorie need");
    let result = CalorieNeedCalculator::compute(&inputs);

    print_rows(
        ctx.labels.label(LabelKey::CalorieCalcTitle),
        &result.rows(),
        &ctx.labels,
        LabelKey::CalorieBmr,
        ctx.format,
    )
}
