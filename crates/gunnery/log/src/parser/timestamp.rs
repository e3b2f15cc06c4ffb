//! Bracketed log timestamps.

use chrono::{NaiveDate, NaiveDateTime};

use super::patterns::TIMESTAMP;

/// Parse the `[ YYYY.MM.DD HH:MM:SS ]` prefix of a log line.
///
/// Month and day are 1-based as written. The result is naive local time with
/// no timezone conversion. Returns `None` when no timestamp is present or the
/// fields do not form a real calendar time (e.g. month 13).
pub fn parse_timestamp(line: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP.captures(line)?;
    let field = |index: usize| caps.get(index)?.as_str().parse::<u32>().ok();

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    date.and_hms_opt(field(4)?, field(5)?, field(6)?)
}
