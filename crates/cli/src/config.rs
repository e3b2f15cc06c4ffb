//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use gunnery_log::IngestConfig;

use crate::output::OutputFormat;

/// Configuration assembled from the environment (and `.env`).
///
/// Command-line flags take precedence over every value here.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding game log files.
    pub log_dir: Option<PathBuf>,
    /// Directory for daily trace files; stderr only when unset.
    pub trace_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub ingest: IngestConfig,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GUNNERY_LOG_DIR` - Game log directory (default: `<Documents>/EVE/logs/Gamelogs`)
    /// - `GUNNERY_TRACE_DIR` - Write trace output to daily files in this directory
    /// - `GUNNERY_OUTPUT` - `summary` or `json` (default: summary)
    /// - `GUNNERY_MAX_LOG_BYTES`, `GUNNERY_RECENT_LIMIT` - see [`IngestConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            ingest: IngestConfig::from_env(),
            ..Self::default()
        };

        config.log_dir = env::var("GUNNERY_LOG_DIR").ok().map(PathBuf::from);
        config.trace_dir = env::var("GUNNERY_TRACE_DIR").ok().map(PathBuf::from);

        if let Some(format) = env::var("GUNNERY_OUTPUT")
            .ok()
            .and_then(|raw| OutputFormat::parse(&raw))
        {
            config.format = format;
        }

        config
    }

    /// Configured log directory, or the platform default.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(default_log_dir)
    }
}

/// `<Documents>/EVE/logs/Gamelogs` for the current user.
fn default_log_dir() -> Option<PathBuf> {
    let dirs = directories::UserDirs::new()?;
    let documents = dirs.document_dir()?;
    Some(documents.join("EVE").join("logs").join("Gamelogs"))
}
