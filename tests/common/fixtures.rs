//! Static raw-row corpora and on-disk fixture helpers.
//!
//! Each corpus is a `&'static [&'static str]` of raw CSV lines as they could
//! appear in a real `emotion_log.csv` after years of schema drift.

use moodlog_core::LogStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Rows already in the canonical 4-column shape.
pub const CORPUS_CANONICAL: &[&str] = &[
    "2024-01-15T08:00:00.000000Z,happy,Morning run,manual",
    "2024-01-15T12:30:00.000000Z,neutral,,auto",
    "2024-01-15T18:05:00.000000Z,sad,\"rainy, grey evening\",manual",
    "2024-01-16T07:45:00.000000Z,angry,traffic,manual",
    "2024-01-16T20:00:00.000000Z,happy,,auto",
];

/// Legacy rows from the 2- and 3-column schema eras.
pub const CORPUS_LEGACY: &[&str] = &[
    "2023-01-01,happy",
    "2023-01-02,sad",
    "2023-02-10,neutral,slow afternoon",
    "2023-02-11 09:15:00,fear,dentist",
];

/// Canonical and legacy rows interleaved, as one real file would hold them.
pub const CORPUS_MIXED: &[&str] = &[
    "2023-01-01,happy",
    "2023-02-10,neutral,slow afternoon",
    "2024-01-15T08:00:00.000000Z,happy,Morning run,manual",
    "2023-01-02,sad",
    "2024-01-15T12:30:00.000000Z,surprise,,auto",
];

/// Rows the drop policy must shed: unparsable timestamps, including a stale
/// header line.
pub const CORPUS_MALFORMED: &[&str] = &[
    "timestamp,emotion,note,source",
    "not-a-date,happy,note,manual",
    "2024-99-99,sad",
    ",angry,note,auto",
];

// ---------------------------------------------------------------------------
// On-disk fixture helpers
// ---------------------------------------------------------------------------

/// Write raw lines to an `emotion_log.csv` inside a fresh temp dir.
///
/// Returns the dir guard (keep it alive for the test's duration) and the
/// file path.
pub fn write_log(lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("emotion_log.csv");
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(&path, content).expect("write fixture log");
    (dir, path)
}

/// A `LogStore` over a path inside a fresh temp dir; no file exists yet.
pub fn temp_store() -> (TempDir, LogStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = LogStore::new(dir.path().join("emotion_log.csv"));
    (dir, store)
}

/// A `LogStore` over a pre-populated fixture file.
pub fn store_with(lines: &[&str]) -> (TempDir, LogStore) {
    let (dir, path) = write_log(lines);
    (dir, LogStore::new(path))
}
