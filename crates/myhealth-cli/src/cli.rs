//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use myhealth_config::{DisplayFormat, Locale};

use crate::commands::{BondArgs, CaloriesArgs, ConfigArgs, ExecArgs, LabelsArgs};

/// MyHealth - bond yield and calorie need calculators
#[derive(Parser)]
#[command(name = "myhealth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, global = true, env = "MYHEALTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Label locale (ru, en)
    #[arg(short, long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Yield to maturity and return of a bond purchase
    Bond(BondArgs),

    /// Basal metabolic rate and daily calorie need
    Calories(CaloriesArgs),

    /// Show the effective label table
    Labels(LabelsArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Run a chat-style command, e.g. `c,c,m,80,180,30`
    Exec(ExecArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}

impl From<DisplayFormat> for OutputFormat {
    fn from(format: DisplayFormat) -> Self {
        match format {
            DisplayFormat::Table => Self::Table,
            DisplayFormat::Json => Self::Json,
            DisplayFormat::Csv => Self::Csv,
            DisplayFormat::Minimal => Self::Minimal,
        }
    }
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}
