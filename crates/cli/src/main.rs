//! `gunnery`: turret hit-chance calculator and combat-log analyzer.
//!
//! Run with `gunnery <command>`; see `gunnery --help`.

mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Hit, MaxTransversal, Parse, Recent};

use crate::config::CliConfig;

/// Turret hit-chance calculator and combat-log analyzer
#[derive(Parser)]
#[command(name = "gunnery")]
#[command(about = "Turret hit chance and combat log statistics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Calculate hit chance for turret and target parameters
    Hit(Hit),

    /// Calculate the maximum transversal for a desired hit chance
    MaxTransversal(MaxTransversal),

    /// Parse a combat log and print statistics
    Parse(Parse),

    /// List the most recent game log files
    Recent(Recent),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GUNNERY_LOG_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.trace_dir.as_deref())?;

    match cli.command {
        Command::Hit(cmd) => cmd.execute(&config),
        Command::MaxTransversal(cmd) => cmd.execute(&config),
        Command::Parse(cmd) => cmd.execute(&config),
        Command::Recent(cmd) => cmd.execute(&config),
    }
}
