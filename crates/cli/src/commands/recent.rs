//! List the most recent game log files.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use gunnery_log::find_recent_logs;

use crate::config::CliConfig;
use crate::output::{OutputFormat, print_json};

/// List the most recent game log files, newest first
#[derive(Parser)]
pub struct Recent {
    /// Log directory (overrides GUNNERY_LOG_DIR)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Maximum number of files (overrides GUNNERY_RECENT_LIMIT)
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Output format (overrides GUNNERY_OUTPUT)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

impl Recent {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.format);
        let limit = self.limit.unwrap_or(config.ingest.recent_limit);
        let Some(dir) = self.dir.or_else(|| config.log_dir()) else {
            bail!("No log directory configured; pass --dir or set GUNNERY_LOG_DIR");
        };

        let logs = find_recent_logs(&dir, limit);
        tracing::debug!(dir = %dir.display(), found = logs.len(), "listed recent logs");

        match format {
            OutputFormat::Summary => print_summary(&dir, &logs),
            OutputFormat::Json => print_json(&logs)?,
        }
        Ok(())
    }
}

fn print_summary(dir: &Path, logs: &[PathBuf]) {
    println!("{} {}", style("Log Directory:").bold().cyan(), dir.display());
    println!();

    if logs.is_empty() {
        println!("{}", style("No log files found").dim());
        return;
    }

    for (index, path) in logs.iter().enumerate() {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        println!("  {:>2}. {name}", index + 1);
    }
}
