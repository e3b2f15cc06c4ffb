//! Markup removal for names embedded in color/font tags.

use super::patterns::TAG;

/// Remove every `<...>` tag and trim surrounding whitespace.
///
/// ```
/// use gunnery_log::strip_tags;
///
/// assert_eq!(strip_tags("<b><color=0xffffffff>Guristas Pithi</b>"), "Guristas Pithi");
/// ```
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").trim().to_string()
}
