//! Parse a combat log and report statistics.
//!
//! Reads a game log file (UTF-16LE), plain text from stdin, or the newest log
//! in the configured log directory.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;

use gunnery_log::{
    CombatStats, IngestConfig, LogReport, find_recent_logs, ingest_log_file, ingest_log_text,
};

use crate::config::CliConfig;
use crate::output::{OutputFormat, format_float, print_json};

/// Parse a combat log and print statistics
#[derive(Parser)]
pub struct Parse {
    /// Log file to parse; `-` reads UTF-8 text from stdin
    #[arg(value_name = "FILE", conflicts_with = "latest")]
    file: Option<PathBuf>,

    /// Parse the most recent log in the log directory
    #[arg(short, long)]
    latest: bool,

    /// Log directory used with --latest (overrides GUNNERY_LOG_DIR)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Include the parsed events in JSON output
    #[arg(short, long)]
    events: bool,

    /// Output format (overrides GUNNERY_OUTPUT)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Where the log text comes from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Stdin,
    File(PathBuf),
}

impl Parse {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.format);
        let source = self.source(config)?;

        let report = match &source {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read log text from stdin")?;
                ingest_log_text(&text, &config.ingest)?
            }
            Source::File(path) => load_file(path, &config.ingest)?,
        };
        tracing::info!(
            source = ?source,
            events = report.events.len(),
            "parsed combat log"
        );

        match format {
            OutputFormat::Summary => {
                if let Source::File(path) = &source {
                    println!("{} {}", style("Log File:").bold().cyan(), path.display());
                }
                println!(
                    "{} {}",
                    style("Events:").bold().cyan(),
                    report.events.len()
                );
                println!();
                print_summary(&report.stats);
            }
            OutputFormat::Json if self.events => print_json(&report)?,
            OutputFormat::Json => print_json(&report.stats)?,
        }
        Ok(())
    }

    fn source(&self, config: &CliConfig) -> Result<Source> {
        if self.latest {
            let Some(dir) = self.log_dir.clone().or_else(|| config.log_dir()) else {
                bail!("No log directory configured; pass --log-dir or set GUNNERY_LOG_DIR");
            };
            return match find_recent_logs(&dir, 1).into_iter().next() {
                Some(path) => Ok(Source::File(path)),
                None => bail!("No log files found in: {}", dir.display()),
            };
        }

        match &self.file {
            Some(path) if path.as_os_str() != "-" => Ok(Source::File(path.clone())),
            _ => Ok(Source::Stdin),
        }
    }
}

fn load_file(path: &Path, config: &IngestConfig) -> Result<LogReport> {
    ingest_log_file(path, config)
        .with_context(|| format!("Failed to ingest log file: {}", path.display()))
}

fn print_summary(stats: &CombatStats) {
    println!("{}", style("=== Combat Summary ===").bold().green());
    println!();

    println!("{}", style("Totals:").bold().yellow());
    println!("  Damage dealt:    {}", stats.total_damage_dealt);
    println!("  Damage received: {}", stats.total_damage_received);
    println!(
        "  Shots:           {} hit / {} missed ({} %)",
        stats.shots_hit,
        stats.shots_missed,
        format_float(stats.hit_rate, 1)
    );
    if let Some(seconds) = stats.time_span.duration_seconds() {
        println!("  Duration:        {} s", format_float(seconds, 0));
    }
    if let Some(dps) = stats.dps {
        println!("  DPS:             {}", format_float(dps, 1));
    }
    println!();

    if !stats.damage_by_target.is_empty() {
        println!("{}", style("Damage by target:").bold().yellow());
        for (target, damage) in sorted_desc(stats.damage_by_target.iter().map(|(k, v)| (k, *v))) {
            println!("  {damage:>8}  {target}");
        }
        println!();
    }

    if !stats.weapons.is_empty() {
        println!("{}", style("Weapons:").bold().yellow());
        let mut weapons: Vec<_> = stats.weapons.iter().collect();
        weapons.sort_by(|a, b| b.1.damage.cmp(&a.1.damage).then_with(|| a.0.cmp(b.0)));
        for (weapon, record) in weapons {
            println!(
                "  {:>8}  {weapon} ({} hits, {} misses)",
                record.damage, record.hits, record.misses
            );
        }
        println!();
    }

    if !stats.hit_qualities.is_empty() {
        println!("{}", style("Hit qualities:").bold().yellow());
        for (quality, count) in &stats.hit_qualities {
            println!("  {count:>8}  {quality}");
        }
    }
}

/// Sort by value descending, then name ascending.
fn sorted_desc<'a>(entries: impl Iterator<Item = (&'a String, u64)>) -> Vec<(&'a String, u64)> {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn parse(args: &[&str]) -> Parse {
        Parse::try_parse_from(std::iter::once("parse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn dash_and_no_file_read_stdin() {
        let config = CliConfig::default();
        assert_eq!(parse(&[]).source(&config).unwrap(), Source::Stdin);
        assert_eq!(parse(&["-"]).source(&config).unwrap(), Source::Stdin);
        assert_eq!(
            parse(&["session.txt"]).source(&config).unwrap(),
            Source::File(PathBuf::from("session.txt"))
        );
    }

    #[test]
    fn latest_picks_newest_log() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("20240110_090000.txt"), b"").unwrap();
        fs::write(dir.path().join("20240115_203000.txt"), b"").unwrap();
        let config = CliConfig {
            log_dir: Some(dir.path().to_path_buf()),
            ..CliConfig::default()
        };

        let source = parse(&["--latest"]).source(&config).unwrap();
        assert_eq!(source, Source::File(dir.path().join("20240115_203000.txt")));
    }

    #[test]
    fn latest_in_empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let dir_arg = dir.path().to_str().unwrap();
        let err = parse(&["--latest", "--log-dir", dir_arg])
            .source(&CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("No log files found"));
    }

    #[test]
    fn file_and_latest_conflict() {
        assert!(Parse::try_parse_from(["parse", "a.txt", "--latest"]).is_err());
    }

    #[test]
    fn load_file_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = load_file(&missing, &IngestConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }

    #[test]
    fn sorted_desc_breaks_ties_by_name() {
        let (a, b, c) = ("alpha".to_string(), "beta".to_string(), "gamma".to_string());
        let sorted = sorted_desc([(&c, 5), (&b, 10), (&a, 5)].into_iter());
        let names: Vec<_> = sorted.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["beta", "alpha", "gamma"]);
    }
}
