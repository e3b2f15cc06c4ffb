//! Combat-log parsing and statistics.
//!
//! The pipeline has two stages:
//! - [`parser`]: one raw log line → zero or one typed [`CombatEvent`]
//! - [`stats`]: an ordered event sequence → [`CombatStats`]
//!
//! [`ingest`] joins them behind a size limit, and [`files`] reads the
//! UTF-16LE log files the game writes and discovers the most recent ones.
//!
//! Parsing and aggregation are total: malformed lines are dropped, never
//! reported as errors. Only file access and the size limit produce
//! [`LogError`].

pub mod config;
pub mod error;
pub mod event;
pub mod files;
pub mod ingest;
pub mod parser;
pub mod stats;

pub use config::IngestConfig;
pub use error::{LogError, Result};
pub use event::{CombatEvent, EventKind, HitQuality};
pub use files::{decode_utf16le, find_recent_logs, parse_log_file, read_log_file};
pub use ingest::{LogReport, ingest_log_file, ingest_log_text};
pub use parser::{parse_combat_line, parse_log_content, parse_timestamp, strip_tags};
pub use stats::{CombatStats, TimeSpan, WeaponStats, calculate_stats};
