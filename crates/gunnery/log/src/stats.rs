//! Aggregation of combat events into summary statistics.
//!
//! [`calculate_stats`] is a pure fold over an ordered event sequence. Stats
//! are rebuilt from the full event list on every call; nothing is cached or
//! updated incrementally.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;

use crate::event::{CombatEvent, EventKind, HitQuality};

/// Per-weapon totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    pub damage: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Earliest and latest timestamp observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSpan {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeSpan {
    /// Widen the span to include `timestamp`.
    pub fn observe(&mut self, timestamp: NaiveDateTime) {
        if self.start.is_none_or(|start| timestamp < start) {
            self.start = Some(timestamp);
        }
        if self.end.is_none_or(|end| timestamp > end) {
            self.end = Some(timestamp);
        }
    }

    /// Span length in seconds, if both ends are known.
    pub fn duration_seconds(&self) -> Option<f64> {
        let (start, end) = (self.start?, self.end?);
        Some((end - start).num_milliseconds() as f64 / 1_000.0)
    }
}

/// Summary statistics over a sequence of combat events.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CombatStats {
    pub total_damage_dealt: u64,
    pub total_damage_received: u64,
    pub shots_hit: u64,
    pub shots_missed: u64,

    /// `shots_hit / (shots_hit + shots_missed) × 100`, or 0 with no shots.
    pub hit_rate: f64,

    /// Damage dealt per target name.
    pub damage_by_target: HashMap<String, u64>,

    /// Damage, hits and misses per weapon name.
    pub weapons: HashMap<String, WeaponStats>,

    /// Landed hits per hit quality.
    pub hit_qualities: BTreeMap<HitQuality, u64>,

    pub time_span: TimeSpan,

    /// Damage dealt per second over the time span; absent when the span is
    /// unknown or zero.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub dps: Option<f64>,
}

impl CombatStats {
    /// Total classified attack events (`shots_hit + shots_missed`).
    pub fn total_shots(&self) -> u64 {
        self.shots_hit.saturating_add(self.shots_missed)
    }
}

/// Fold an ordered event sequence into [`CombatStats`].
///
/// - `damage_dealt`: totals, shots hit, per-target damage, weapon damage and
///   hits, hit-quality count
/// - `damage_received`: total damage received only
/// - `miss`: shots missed, weapon misses
/// - `unknown`: ignored
///
/// Every event carrying a timestamp widens the time span regardless of kind.
/// Totals saturate at `u64::MAX` instead of overflowing.
pub fn calculate_stats<'a, I>(events: I) -> CombatStats
where
    I: IntoIterator<Item = &'a CombatEvent>,
{
    let mut stats = CombatStats::default();

    for event in events {
        if let Some(timestamp) = event.timestamp {
            stats.time_span.observe(timestamp);
        }

        match &event.kind {
            EventKind::DamageDealt { damage, target } => {
                stats.total_damage_dealt = stats.total_damage_dealt.saturating_add(*damage);
                stats.shots_hit = stats.shots_hit.saturating_add(1);
                let by_target = stats.damage_by_target.entry(target.clone()).or_default();
                *by_target = by_target.saturating_add(*damage);

                if let Some(weapon) = &event.weapon {
                    let record = stats.weapons.entry(weapon.clone()).or_default();
                    record.damage = record.damage.saturating_add(*damage);
                    record.hits = record.hits.saturating_add(1);
                }
                if let Some(quality) = event.hit_quality {
                    let count = stats.hit_qualities.entry(quality).or_default();
                    *count = count.saturating_add(1);
                }
            }
            EventKind::DamageReceived { damage, .. } => {
                stats.total_damage_received = stats.total_damage_received.saturating_add(*damage);
            }
            EventKind::Miss { .. } => {
                stats.shots_missed = stats.shots_missed.saturating_add(1);
                if let Some(weapon) = &event.weapon {
                    let record = stats.weapons.entry(weapon.clone()).or_default();
                    record.misses = record.misses.saturating_add(1);
                }
            }
            EventKind::Unknown => {}
        }
    }

    let shots = stats.total_shots();
    stats.hit_rate = if shots > 0 {
        stats.shots_hit as f64 / shots as f64 * 100.0
    } else {
        0.0
    };

    stats.dps = stats
        .time_span
        .duration_seconds()
        .filter(|&seconds| seconds > 0.0)
        .map(|seconds| stats.total_damage_dealt as f64 / seconds);

    stats
}
