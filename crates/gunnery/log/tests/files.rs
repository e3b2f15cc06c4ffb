use std::fs;
use std::path::Path;

use gunnery_log::{IngestConfig, LogError, find_recent_logs, ingest_log_file, parse_log_file};
use tempfile::TempDir;

fn write_utf16le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    fs::write(path, bytes).unwrap();
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn parses_utf16le_log_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("20240115_203000.txt");
    write_utf16le(
        &path,
        "------------------------------------------------------------\r\n\
         [ 2024.01.15 20:30:00 ] (combat) <b>120</b> to <b>Serpentis Spy</b> - Ion Blaster - Smashes\r\n\
         [ 2024.01.15 20:30:04 ] (combat) Serpentis Spy misses you completely\r\n",
    );

    let events = parse_log_file(&path).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].damage(), Some(120));
    assert_eq!(events[0].weapon.as_deref(), Some("Ion Blaster"));
    assert_eq!(events[1].kind.as_str(), "miss");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = parse_log_file(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, LogError::Io { .. }));
}

#[test]
fn ingest_file_applies_limit_to_decoded_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("20240115_203000.txt");
    write_utf16le(&path, "[ 2024.01.15 20:30:00 ] (combat) <b>1</b> to <b>X</b>\n");

    let tight = IngestConfig {
        max_bytes: 10,
        ..IngestConfig::default()
    };
    assert!(matches!(
        ingest_log_file(&path, &tight),
        Err(LogError::TooLarge { .. })
    ));

    let report = ingest_log_file(&path, &IngestConfig::default()).unwrap();
    assert_eq!(report.stats.total_damage_dealt, 1);
}

#[test]
fn recent_logs_are_newest_first_with_undated_last() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "20240110_090000.txt");
    touch(dir.path(), "20240115_203000_91234567.txt");
    touch(dir.path(), "20231231_235959.txt");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "20240120_000000.log");
    fs::create_dir(dir.path().join("20250101_000000.txt")).unwrap();

    let recent = find_recent_logs(dir.path(), 10);
    assert_eq!(
        names(&recent),
        [
            "20240115_203000_91234567.txt",
            "20240110_090000.txt",
            "20231231_235959.txt",
            "notes.txt",
        ]
    );
}

#[test]
fn recent_logs_respects_limit() {
    let dir = TempDir::new().unwrap();
    for day in 10..20 {
        touch(dir.path(), &format!("202401{day}_120000.txt"));
    }

    let recent = find_recent_logs(dir.path(), 3);
    assert_eq!(
        names(&recent),
        ["20240119_120000.txt", "20240118_120000.txt", "20240117_120000.txt"]
    );
    assert!(find_recent_logs(dir.path(), 0).is_empty());
}

#[test]
fn recent_logs_on_missing_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(find_recent_logs(dir.path().join("does-not-exist"), 5).is_empty());
}

#[cfg(unix)]
#[test]
fn recent_logs_include_symlinked_files() {
    let store = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    touch(store.path(), "20240115_203000.txt");
    std::os::unix::fs::symlink(
        store.path().join("20240115_203000.txt"),
        dir.path().join("20240115_203000.txt"),
    )
    .unwrap();
    touch(dir.path(), "20240110_090000.txt");
    std::os::unix::fs::symlink(
        store.path().join("missing.txt"),
        dir.path().join("20240120_000000.txt"),
    )
    .unwrap();

    let recent = find_recent_logs(dir.path(), 10);
    assert_eq!(names(&recent), ["20240115_203000.txt", "20240110_090000.txt"]);
}
