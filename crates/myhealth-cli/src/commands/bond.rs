//! Bond command implementation.
//!
//! Yield to maturity and total return of buying a bond with a fixed sum.

use clap::Args;
use myhealth_calc::{BondInputs, BondYieldCalculator};
use myhealth_core::{Date, LabelKey, LabelLookup};
use rust_decimal::Decimal;

use crate::commands::{parse_date, parse_decimal, Context};
use crate::error::CliResult;
use crate::output::{print_info, print_rows};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Nominal (face) value
    #[arg(short, long, value_parser = parse_decimal)]
    pub nominal: Decimal,

    /// Current clean price
    #[arg(short, long, value_parser = parse_decimal)]
    pub price: Decimal,

    /// Maturity date (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(short, long, value_parser = parse_date)]
    pub maturity: Date,

    /// Accrued coupon interest paid on purchase (NCD)
    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub ncd: Decimal,

    /// Coupon payment amount (CD)
    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub coupon: Decimal,

    /// Number of coupon payments until maturity
    #[arg(long, default_value = "0")]
    pub coupon_count: u32,

    /// Sum available for the purchase
    #[arg(short, long, value_parser = parse_decimal)]
    pub sum: Decimal,

    /// Evaluation date. Defaults to today.
    #[arg(short, long, value_parser = parse_date)]
    pub evaluation_date: Option<Date>,
}

impl BondArgs {
    fn inputs(&self) -> BondInputs {
        BondInputs {
            nominal: self.nominal,
            price: self.price,
            maturity_date: self.maturity,
            ncd: self.ncd,
            coupon_amount: self.coupon,
            coupon_count: self.coupon_count,
            investable_sum: self.sum,
        }
    }
}

/// Execute the bond command.
pub fn execute(args: BondArgs, ctx: &Context) -> CliResult<()> {
    let evaluation_date = args.evaluation_date.unwrap_or_else(Date::today);
    let inputs = args.inputs();

    tracing::debug!(?inputs, %evaluation_date, "computing bond yield");
    let result = BondYieldCalculator::compute(&inputs, evaluation_date)?;

    print_rows(
        ctx.labels.label(LabelKey::BondCalcTitle),
        &result.rows(),
        &ctx.labels,
        LabelKey::BondYtm,
        ctx.format,
    )?;

    if !ctx.quiet && ctx.format == crate::cli::OutputFormat::Table {
        print_info(&format!(
            "{}: {} ({})",
            ctx.labels.label(LabelKey::BondMaturityDate),
            ctx.date_style.format(inputs.maturity_date),
            ctx.date_style.format(evaluation_date),
        ));
    }

    Ok(())
}
