//! Ingestion limits and defaults.
use std::env;

/// Configuration for log ingestion and recent-log discovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestConfig {
    /// Largest accepted log text, in bytes of decoded UTF-8.
    pub max_bytes: usize,
    /// Default number of files returned by recent-log discovery.
    pub recent_limit: usize,
}

impl IngestConfig {
    pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;
    pub const DEFAULT_RECENT_LIMIT: usize = 10;

    pub const fn new() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            recent_limit: Self::DEFAULT_RECENT_LIMIT,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GUNNERY_MAX_LOG_BYTES` - Largest accepted log text (default: 10 MiB)
    /// - `GUNNERY_RECENT_LIMIT` - Recent log files to list (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_bytes) = read_env::<usize>("GUNNERY_MAX_LOG_BYTES") {
            config.max_bytes = max_bytes.max(1);
        }

        if let Some(limit) = read_env::<usize>("GUNNERY_RECENT_LIMIT") {
            config.recent_limit = limit.max(1);
        }

        config
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
