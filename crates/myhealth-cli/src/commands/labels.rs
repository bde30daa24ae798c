//! Labels command implementation.

use clap::Args;
use myhealth_config::Validate;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the labels command.
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Report missing or blank labels and exit non-zero if any
    #[arg(long)]
    pub check: bool,
}

/// Execute the labels command.
pub fn execute(args: LabelsArgs, ctx: &Context) -> CliResult<()> {
    if args.check {
        ctx.labels.validate_or_error()?;
    }

    let rows: Vec<KeyValue> = ctx
        .labels
        .iter()
        .map(|(key, text)| KeyValue::new(key.as_str(), text))
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header(&format!("Labels ({})", ctx.labels.locale()));
    }
    print_output(&rows, ctx.format)
}
