//! Config command implementation.
//!
//! Shows and initializes the configuration file.

use clap::{Args, Subcommand};
use myhealth_config::{AppConfig, Validate};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{print_header, print_info, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a default configuration file
    Init(InitArgs),

    /// Validate the configuration file
    Check,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> CliResult<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args, ctx),
        ConfigCommand::Check => execute_check(ctx),
    }
}

/// Show current configuration.
fn execute_show(ctx: &Context) -> CliResult<()> {
    let config = &ctx.config;
    let results = vec![
        KeyValue::new("locale", config.locale.as_str()),
        KeyValue::new(
            "labels_file",
            config
                .labels_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        KeyValue::new("output_format", format!("{:?}", config.output_format).to_lowercase()),
        KeyValue::new("date_style", format!("{:?}", config.date_style).to_lowercase()),
    ];

    match ctx.format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&results, ctx.format)
        }
        OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&results, ctx.format),
    }
}

/// Show configuration file location.
fn execute_path(ctx: &Context) -> CliResult<()> {
    println!("{}", ctx.config_path.display());
    if !ctx.quiet && !ctx.config_path.exists() {
        print_info("File does not exist; defaults are in use.");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, ctx: &Context) -> CliResult<()> {
    if ctx.config_path.exists() && !args.force {
        print_info(&format!(
            "{} already exists (use --force to overwrite)",
            ctx.config_path.display()
        ));
        return Ok(());
    }

    AppConfig::default().save(&ctx.config_path)?;
    tracing::info!(path = %ctx.config_path.display(), "wrote default configuration");
    print_success(&format!("Wrote {}", ctx.config_path.display()));
    Ok(())
}

/// Validate the configuration and its label table.
fn execute_check(ctx: &Context) -> CliResult<()> {
    ctx.config.validate_or_error()?;
    ctx.labels.validate_or_error()?;
    if !ctx.quiet {
        print_success("Configuration is valid");
    }
    Ok(())
}
