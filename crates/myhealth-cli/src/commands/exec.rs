//! Exec command implementation.
//!
//! Runs one chat-style command line and prints the reply text.

use clap::Args;
use myhealth_core::Date;

use crate::chat::ChatProcessor;
use crate::commands::{parse_date, Context};
use crate::error::CliResult;

/// Arguments for the exec command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Evaluation date for bond commands. Defaults to today.
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// Comma separated command, e.g. `c,c,m,80,180,30`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub words: Vec<String>,
}

/// Execute the exec command.
pub fn execute(args: ExecArgs, ctx: &Context) -> CliResult<()> {
    let line = args.words.join(" ");
    let today = args.date.unwrap_or_else(Date::today);

    tracing::debug!(%line, %today, "processing chat command");
    let reply = ChatProcessor::new(&ctx.labels, today).process(&line)?;

    print!("{reply}");
    Ok(())
}
