//! MyHealth CLI - bond yield and calorie need calculators.
//!
//! # Usage
//!
//! ```bash
//! # Yield to maturity of a bond purchase
//! myhealth bond -n 1000 -p 950 -m 01.01.2026 --ncd 10 --coupon 40 --coupon-count 2 -s 100000
//!
//! # Daily calorie need
//! myhealth calories -g m -w 80 --height 180 -a 30
//!
//! # Chat-style command
//! myhealth exec c,c,f,60,165,25
//!
//! # English labels, JSON output
//! myhealth -l en -f json calories -g f -w 60 --height 165 -a 25
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use myhealth_config::AppConfig;

mod chat;
mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };

    let mut config = AppConfig::load_or_default(&config_path)?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    tracing::debug!(path = %config_path.display(), locale = %config.locale, "configuration loaded");

    let ctx = Context {
        format: cli.format.unwrap_or_else(|| config.output_format.into()),
        labels: config.label_table()?,
        date_style: config.date_style,
        quiet: cli.quiet,
        config_path,
        config,
    };

    match cli.command {
        Commands::Bond(args) => commands::bond::execute(args, &ctx)?,
        Commands::Calories(args) => commands::calories::execute(args, &ctx)?,
        Commands::Labels(args) => commands::labels::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
        Commands::Exec(args) => commands::exec::execute(args, &ctx)?,
    }

    Ok(())
}
