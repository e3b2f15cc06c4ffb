//! Ingestion boundary: raw log text in, events and statistics out.

use std::path::Path;

use crate::config::IngestConfig;
use crate::error::{LogError, Result};
use crate::event::CombatEvent;
use crate::files::read_log_file;
use crate::parser::parse_log_content;
use crate::stats::{CombatStats, calculate_stats};

/// Parsed events together with their statistics.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogReport {
    pub events: Vec<CombatEvent>,
    pub stats: CombatStats,
}

impl LogReport {
    /// Build a report from already-parsed events.
    ///
    /// Unknown events are dropped before aggregation.
    pub fn from_events(mut events: Vec<CombatEvent>) -> Self {
        events.retain(|event| !event.kind.is_unknown());
        let stats = calculate_stats(&events);
        Self { events, stats }
    }
}

/// Parse and aggregate raw log text.
///
/// # Errors
///
/// Returns [`LogError::TooLarge`] if `text` exceeds `config.max_bytes`.
pub fn ingest_log_text(text: &str, config: &IngestConfig) -> Result<LogReport> {
    if text.len() > config.max_bytes {
        return Err(LogError::TooLarge {
            size: text.len(),
            limit: config.max_bytes,
        });
    }

    let report = LogReport::from_events(parse_log_content(text));
    tracing::debug!(
        events = report.events.len(),
        damage_dealt = report.stats.total_damage_dealt,
        "ingested combat log"
    );
    Ok(report)
}

/// Read a UTF-16LE log file, then parse and aggregate it.
///
/// The size limit applies to the decoded text.
pub fn ingest_log_file(path: impl AsRef<Path>, config: &IngestConfig) -> Result<LogReport> {
    let text = read_log_file(path)?;
    ingest_log_text(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_text() {
        let config = IngestConfig {
            max_bytes: 16,
            ..IngestConfig::default()
        };
        let err = ingest_log_text(&"x".repeat(17), &config).unwrap_err();
        assert!(matches!(err, LogError::TooLarge { size: 17, limit: 16 }));
    }

    #[test]
    fn text_at_limit_is_accepted() {
        let config = IngestConfig {
            max_bytes: 16,
            ..IngestConfig::default()
        };
        let report = ingest_log_text(&"x".repeat(16), &config).unwrap();
        assert!(report.events.is_empty());
        assert_eq!(report.stats, CombatStats::default());
    }

    #[test]
    fn from_events_filters_unknown() {
        let unknown = CombatEvent {
            timestamp: None,
            kind: crate::EventKind::Unknown,
            weapon: None,
            hit_quality: None,
            raw_line: "(combat) ???".into(),
        };
        let report = LogReport::from_events(vec![unknown]);
        assert!(report.events.is_empty());
    }
}
