//! Shared output helpers for commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use gunnery_core::float_repr::non_finite_label;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// Pretty-printed JSON on stdout
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_str(raw.trim(), true).ok()
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Format a float with fixed precision, spelling out non-finite values.
pub fn format_float(value: f64, precision: usize) -> String {
    match non_finite_label(value) {
        Some(label) => label.to_string(),
        None => format!("{value:.precision$}"),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
