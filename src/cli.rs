use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydrolag rainfall event and discharge lag analysis.
#[derive(Parser)]
#[command(
    name = "hydrolag",
    version,
    about = "Rainfall event detection and discharge lag analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Extract rainfall events and their discharge lags.
    Events(EventsArgs),
    /// Sum a daily column per water year.
    Annual(AnnualArgs),
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the events JSON output. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `annual` subcommand.
#[derive(clap::Args)]
pub struct AnnualArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Column to aggregate.
    #[arg(short, long)]
    pub field: String,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the annual totals JSON output. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
