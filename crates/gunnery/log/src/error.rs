//! Error types raised at the log-ingestion I/O boundary.
//!
//! Line parsing and aggregation are total and never produce these; only
//! reading files and enforcing the ingestion size limit do.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while reading or admitting combat-log content.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log content is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, LogError>;
