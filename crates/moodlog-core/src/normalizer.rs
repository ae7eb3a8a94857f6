//! Normalizer — maps raw persisted rows into canonical [`MoodEntry`] values.
//!
//! Each [`RawRecord`] variant has one explicit normalization arm. Timestamp
//! parsing is shape-sniffed with regexes first, then value-parsed with
//! `chrono`; a row whose timestamp parses to nothing is dropped, not fatal.
//! A stale header line (`timestamp,emotion,...`) fails the timestamp parse
//! like any other bad row and falls out under the same drop policy.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::types::{MoodEntry, RawRecord, Source};

/// A row excluded from the loaded table.
///
/// Unparsable timestamps are the only non-fatal per-row failure; everything
/// else either normalizes or is a fatal [`SchemaError`](crate::SchemaError).
/// The offending text is kept so tests and telemetry can inspect the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line number in the log file.
    pub line: u64,
    /// The raw timestamp field that failed to parse.
    pub timestamp: String,
}

/// Normalize one raw row into a canonical entry.
///
/// Missing trailing fields default per column: `note` to the empty string,
/// `source` to [`Source::Auto`].
pub fn normalize(record: RawRecord, line: u64) -> Result<MoodEntry, DroppedRow> {
    let ts = match parse_timestamp(record.timestamp()) {
        Some(ts) => ts,
        None => {
            return Err(DroppedRow {
                line,
                timestamp: record.timestamp().to_string(),
            })
        }
    };

    let entry = match record {
        RawRecord::Two { emotion, .. } => MoodEntry {
            ts,
            emotion: normalize_emotion(&emotion),
            note: String::new(),
            source: Source::Auto,
        },
        RawRecord::Three { emotion, note, .. } => MoodEntry {
            ts,
            emotion: normalize_emotion(&emotion),
            note,
            source: Source::Auto,
        },
        RawRecord::Four {
            emotion,
            note,
            source,
            ..
        } => MoodEntry {
            ts,
            emotion: normalize_emotion(&emotion),
            note,
            source: Source::from_raw(&source),
        },
    };
    Ok(entry)
}

/// Trim surrounding whitespace and lowercase an emotion label.
pub fn normalize_emotion(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

struct TsShapes {
    datetime_t: Regex,
    datetime_space: Regex,
    date_only: Regex,
}

fn shapes() -> &'static TsShapes {
    static SHAPES: OnceLock<TsShapes> = OnceLock::new();
    SHAPES.get_or_init(|| TsShapes {
        datetime_t: Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?$").unwrap(),
        datetime_space: Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(\.\d+)?$").unwrap(),
        date_only: Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(),
    })
}

/// Parse a raw timestamp field into an instant.
///
/// Accepted shapes, in sniffing order:
/// - RFC 3339 (`2024-01-15T10:00:00.000000Z`, offset forms included)
/// - naive `YYYY-MM-DDTHH:MM:SS[.frac]`, assumed UTC
/// - naive `YYYY-MM-DD HH:MM:SS[.frac]`, assumed UTC
/// - bare `YYYY-MM-DD`, midnight UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let shapes = shapes();
    if shapes.datetime_t.is_match(s) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if shapes.datetime_space.is_match(s) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if shapes.date_only.is_match(s) {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}
