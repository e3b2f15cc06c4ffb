//! Typed combat events produced by the line parser.

use chrono::NaiveDateTime;

/// Hit-quality descriptor reported by the game for a landed (or received) shot.
///
/// Parsed case-insensitively, displayed and serialized in lower case.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HitQuality {
    /// Critical hit.
    Wrecks,
    /// Strongest regular hit.
    Smashes,
    /// Above-average hit.
    Penetrates,
    /// Average hit.
    Hits,
    /// Below-average hit.
    Glances,
    /// Weakest hit.
    Grazes,
}

/// What a combat line describes.
///
/// Variant fields belong to the rule that classified the line; when a later
/// rule overrides an earlier one the whole variant is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum EventKind {
    /// Damage we dealt to `target`.
    DamageDealt { damage: u64, target: String },
    /// Damage we took from `source`.
    DamageReceived { damage: u64, source: String },
    /// A shot that missed `target` (`"you"` when we were the one missed).
    Miss { target: String },
    /// A combat line no rule recognised. Never aggregated.
    Unknown,
}

impl EventKind {
    /// Returns the snake_case tag of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DamageDealt { .. } => "damage_dealt",
            Self::DamageReceived { .. } => "damage_received",
            Self::Miss { .. } => "miss",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// One parsed combat-log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CombatEvent {
    /// Wall-clock time from the line's bracketed prefix, if present.
    pub timestamp: Option<NaiveDateTime>,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: EventKind,

    /// Weapon (or drone, module) named in the trailing ` - ` segment.
    pub weapon: Option<String>,

    pub hit_quality: Option<HitQuality>,

    /// The unmodified source line.
    pub raw_line: String,
}

impl CombatEvent {
    /// Damage amount for damage events.
    pub fn damage(&self) -> Option<u64> {
        match self.kind {
            EventKind::DamageDealt { damage, .. } | EventKind::DamageReceived { damage, .. } => {
                Some(damage)
            }
            EventKind::Miss { .. } | EventKind::Unknown => None,
        }
    }
}
