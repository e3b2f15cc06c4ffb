//! Line-level combat-log parser.
//!
//! Turns one raw log line into zero or one [`CombatEvent`]:
//!
//! 1. Match the line shape `[timestamp] (channel) content`; anything else, or
//!    any channel other than `combat`, yields `None`.
//! 2. Classify the content (see [`classify`]).
//! 3. Attach weapon and hit quality independently of the classification.
//!
//! The parser returns `Unknown` events as-is; [`parse_log_content`] and the
//! aggregation boundary drop them.

pub mod classify;
pub mod markup;
mod patterns;
pub mod timestamp;

pub use classify::{CLASSIFY_RULES, ClassifyRule, classify, extract_hit_quality, extract_weapon};
pub use markup::strip_tags;
pub use timestamp::parse_timestamp;

use crate::event::CombatEvent;
use patterns::LINE_SHAPE;

/// Channel name of combat lines.
pub const COMBAT_CHANNEL: &str = "combat";

/// Parse a single log line.
///
/// # Returns
///
/// - `None` if the line is not a `(combat)` line
/// - `Some(event)` otherwise, where `event.kind` may be `Unknown`
pub fn parse_combat_line(line: &str) -> Option<CombatEvent> {
    let caps = LINE_SHAPE.captures(line)?;
    if &caps[1] != COMBAT_CHANNEL {
        return None;
    }
    let content = caps.get(2).map_or("", |m| m.as_str());

    Some(CombatEvent {
        timestamp: parse_timestamp(line),
        kind: classify(content),
        weapon: extract_weapon(content),
        hit_quality: extract_hit_quality(content),
        raw_line: line.to_string(),
    })
}

/// Parse every line of `text`, keeping recognised combat events in order.
///
/// Lines are split on `\n`; a trailing `\r` is removed first.
pub fn parse_log_content(text: &str) -> Vec<CombatEvent> {
    let mut lines = 0usize;
    let mut unknown = 0usize;

    let events: Vec<CombatEvent> = text
        .split('\n')
        .inspect(|_| lines += 1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(parse_combat_line)
        .filter(|event| {
            let keep = !event.kind.is_unknown();
            if !keep {
                unknown += 1;
                tracing::trace!(line = %event.raw_line, "dropping unclassified combat line");
            }
            keep
        })
        .collect();

    tracing::debug!(
        lines,
        events = events.len(),
        unknown,
        "parsed combat log content"
    );

    events
}
