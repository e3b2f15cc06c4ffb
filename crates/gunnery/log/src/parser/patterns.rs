//! Compiled line patterns.
//!
//! Patterns are compiled once on first use and shared read-only afterwards.

use std::sync::LazyLock;

use regex::Regex;

/// `[ YYYY.MM.DD HH:MM:SS ]`, whitespace tolerant.
pub(crate) static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\[\s*(\d{4})\s*\.\s*(\d{1,2})\s*\.\s*(\d{1,2})\s+(\d{1,2})\s*:\s*(\d{1,2})\s*:\s*(\d{1,2})\s*\]")
});

/// Optional timestamp bracket, `(channel)`, then the message content.
pub(crate) static LINE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*(?:\[[^\]]*\]\s*)?\(([^)]*)\)\s*(.*)$"));

/// Any markup tag.
pub(crate) static TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>"));

/// Leading amount, the word `to`, then a bolded (optionally colored) target.
pub(crate) static DAMAGE_DEALT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*(?:<[^>]*>\s*)*(\d+)\b.*?\bto\b\s*(?:<[^>]*>\s*)*<b>(.*?)</b>")
});

/// Leading amount, the word `from`, then a bolded (optionally colored) source.
pub(crate) static DAMAGE_RECEIVED: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*(?:<[^>]*>\s*)*(\d+)\b.*?\bfrom\b\s*(?:<[^>]*>\s*)*<b>(.*?)</b>")
});

/// `misses you completely` or `misses <name> completely`.
pub(crate) static MISS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bmisses\s+(.+?)\s+completely\b"));

/// First ` - ` delimited segment, up to the next delimiter or end of line.
pub(crate) static WEAPON: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\s-\s+(.+?)(?:\s+-\s|\s*$)"));

pub(crate) static HIT_QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(wrecks|penetrates|hits|grazes|glances|smashes)\b")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}
