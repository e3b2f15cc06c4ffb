//! Classification of combat-line content into an [`EventKind`].
//!
//! Classification is an ordered rule list. Every rule is evaluated and each
//! match replaces the previous one, so the last matching rule wins:
//!
//! ```text
//! damage_dealt  <  damage_received  <  miss
//! ```
//!
//! Weapon and hit-quality extraction are independent of the chosen kind.

use std::str::FromStr;

use crate::event::{EventKind, HitQuality};

use super::markup::strip_tags;
use super::patterns::{DAMAGE_DEALT, DAMAGE_RECEIVED, HIT_QUALITY, MISS, WEAPON};

/// A classification rule: content → kind, if the rule recognises the content.
pub type ClassifyRule = fn(&str) -> Option<EventKind>;

/// Rules in evaluation order. Later entries override earlier ones.
pub const CLASSIFY_RULES: [(&str, ClassifyRule); 3] = [
    ("damage_dealt", damage_dealt),
    ("damage_received", damage_received),
    ("miss", miss),
];

/// Classify line content, returning [`EventKind::Unknown`] when no rule matches.
pub fn classify(content: &str) -> EventKind {
    CLASSIFY_RULES
        .iter()
        .filter_map(|(_, rule)| rule(content))
        .last()
        .unwrap_or(EventKind::Unknown)
}

fn damage_dealt(content: &str) -> Option<EventKind> {
    let caps = DAMAGE_DEALT.captures(content)?;
    Some(EventKind::DamageDealt {
        damage: caps[1].parse().ok()?,
        target: strip_tags(&caps[2]),
    })
}

fn damage_received(content: &str) -> Option<EventKind> {
    let caps = DAMAGE_RECEIVED.captures(content)?;
    Some(EventKind::DamageReceived {
        damage: caps[1].parse().ok()?,
        source: strip_tags(&caps[2]),
    })
}

fn miss(content: &str) -> Option<EventKind> {
    let caps = MISS.captures(content)?;
    let name = strip_tags(&caps[1]);
    let target = if name.eq_ignore_ascii_case("you") {
        "you".to_string()
    } else {
        name
    };
    Some(EventKind::Miss { target })
}

/// Weapon named in the first ` - ` segment of the content.
///
/// A segment that is only a hit-quality phrase (`- Hits`, `- Glances Off`)
/// names no weapon.
pub fn extract_weapon(content: &str) -> Option<String> {
    let caps = WEAPON.captures(content)?;
    let weapon = strip_tags(&caps[1]);

    let first_word = weapon.split_whitespace().next()?;
    if HitQuality::from_str(first_word).is_ok() {
        return None;
    }

    Some(weapon)
}

/// First hit-quality keyword in the tag-stripped content.
pub fn extract_hit_quality(content: &str) -> Option<HitQuality> {
    let plain = strip_tags(content);
    let caps = HIT_QUALITY.captures(&plain)?;
    HitQuality::from_str(&caps[1]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEALT: &str = "<color=0xff00ffff><b>312</b> <color=0x77ffffff><font size=10>to</font> \
        <b><color=0xffffffff>Guristas Pithi</b><font size=10><color=0x77ffffff> - \
        425mm Railgun II - Penetrates";
    const RECEIVED: &str = "<color=0xffcc0000><b>87</b> <color=0x77ffffff><font size=10>from</font> \
        <b><color=0xffffffff>Guristas Pithi</b><font size=10><color=0x77ffffff> - Smashes";

    #[test]
    fn classifies_damage_dealt() {
        assert_eq!(
            classify(DEALT),
            EventKind::DamageDealt {
                damage: 312,
                target: "Guristas Pithi".into()
            }
        );
        assert_eq!(extract_weapon(DEALT).as_deref(), Some("425mm Railgun II"));
        assert_eq!(extract_hit_quality(DEALT), Some(HitQuality::Penetrates));
    }

    #[test]
    fn classifies_damage_received_without_weapon() {
        assert_eq!(
            classify(RECEIVED),
            EventKind::DamageReceived {
                damage: 87,
                source: "Guristas Pithi".into()
            }
        );
        assert_eq!(extract_weapon(RECEIVED), None);
        assert_eq!(extract_hit_quality(RECEIVED), Some(HitQuality::Smashes));
    }

    #[test]
    fn classifies_misses() {
        assert_eq!(
            classify("Guristas Pithi misses you completely - Light Missile"),
            EventKind::Miss {
                target: "you".into()
            }
        );
        let outgoing = "Your 425mm Railgun II misses <b><color=0xffffffff>Pithi Arrogator</b> \
            completely - 425mm Railgun II";
        assert_eq!(
            classify(outgoing),
            EventKind::Miss {
                target: "Pithi Arrogator".into()
            }
        );
    }

    #[test]
    fn received_overrides_dealt() {
        let content = "50 damage to <b>Alpha</b> from <b>Beta</b>";
        assert!(DAMAGE_DEALT.is_match(content));
        assert_eq!(
            classify(content),
            EventKind::DamageReceived {
                damage: 50,
                source: "Beta".into()
            }
        );
    }

    #[test]
    fn miss_overrides_damage() {
        let content = "50 to <b>Alpha</b> but Beta misses you completely";
        assert!(DAMAGE_DEALT.is_match(content));
        assert_eq!(
            classify(content),
            EventKind::Miss {
                target: "you".into()
            }
        );
    }

    #[test]
    fn unrecognised_content_is_unknown() {
        assert_eq!(classify("Warp scramble attempt from <b>Rat</b>"), EventKind::Unknown);
        assert_eq!(classify(""), EventKind::Unknown);
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = CLASSIFY_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["damage_dealt", "damage_received", "miss"]);
    }

    #[test]
    fn quality_word_inside_other_word_is_ignored() {
        assert_eq!(extract_hit_quality("50 Wrecking damage to <b>X</b>"), None);
        assert_eq!(extract_hit_quality("50 to <b>X</b> - Gun - WRECKS"), Some(HitQuality::Wrecks));
    }
}
