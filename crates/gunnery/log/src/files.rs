//! Log files on disk.
//!
//! Game logs are written as UTF-16 little-endian text, one file per session,
//! named `YYYYMMDD_HHMMSS[_suffix].txt`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LogError, Result};
use crate::event::CombatEvent;
use crate::parser::parse_log_content;

/// Extension of game log files.
pub const LOG_EXTENSION: &str = ".txt";

const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Decode UTF-16 little-endian bytes.
///
/// A leading byte-order mark is skipped, an odd trailing byte is ignored and
/// unpaired surrogates become U+FFFD.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(&UTF16LE_BOM).unwrap_or(bytes);
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Read and decode a UTF-16LE log file.
pub fn read_log_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_utf16le(&bytes))
}

/// Parse a UTF-16LE log file into recognised combat events.
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<Vec<CombatEvent>> {
    let path = path.as_ref();
    let text = read_log_file(path)?;
    tracing::debug!(path = %path.display(), chars = text.len(), "read combat log file");
    Ok(parse_log_content(&text))
}

/// List the most recent log files in `directory`, newest first.
///
/// Files are ordered by the `YYYYMMDD_HHMMSS` prefix of their name; files
/// without that prefix sort after all dated files. At most `limit` paths are
/// returned. Any failure to list the directory yields an empty list.
pub fn find_recent_logs(directory: impl AsRef<Path>, limit: usize) -> Vec<PathBuf> {
    let directory = directory.as_ref();

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                directory = %directory.display(),
                error = %e,
                "failed to list log directory"
            );
            return Vec::new();
        }
    };

    let mut logs: Vec<(Option<String>, String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        // `is_file` follows symlinks.
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if !name.ends_with(LOG_EXTENSION) {
                return None;
            }
            Some((session_sort_key(&name), name, entry.path()))
        })
        .collect();

    // Newest first; `None` keys order below every dated key and land last.
    logs.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    logs.into_iter()
        .take(limit)
        .map(|(_, _, path)| path)
        .collect()
}

/// Sortable key from a leading `YYYYMMDD_HHMMSS`, as `YYYYMMDDHHMMSS`.
fn session_sort_key(file_name: &str) -> Option<String> {
    let prefix = file_name.get(..15).filter(|p| p.is_ascii())?;
    let (date, rest) = prefix.split_at(8);
    let time = rest.strip_prefix('_')?;

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(date) || !all_digits(time) {
        return None;
    }

    Some(format!("{date}{time}"))
}
