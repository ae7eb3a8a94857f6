//! Core types for moodlog-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline layers: the canonical [`MoodEntry`], its [`Source`] provenance
//! tag, and the [`RawRecord`] legacy-row variant that every persisted row
//! passes through before normalization.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use crate::store::SchemaError;

/// One logged emotional observation in canonical 4-field form.
///
/// Every field is populated after normalization: `note` is an empty string
/// when absent (never null), and `source` defaults to [`Source::Auto`] for
/// rows that predate the source column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    /// Instant the mood was experienced or logged (UTC). Rows whose
    /// timestamp fails to parse never become entries.
    #[serde(rename = "timestamp", serialize_with = "serialize_ts")]
    pub ts: DateTime<Utc>,
    /// Emotion label, trimmed and lowercased. Open vocabulary — labels
    /// outside [`VOCABULARY`] are normalized, not rejected.
    pub emotion: String,
    /// Free-text note, empty when the user attached none.
    pub note: String,
    /// Provenance of the entry.
    pub source: Source,
}

impl MoodEntry {
    /// Calendar date component of `ts`. Derived on demand, never persisted.
    pub fn date(&self) -> NaiveDate {
        self.ts.date_naive()
    }

    /// Wire form of `ts`: RFC 3339 with microsecond precision.
    pub fn ts_string(&self) -> String {
        self.ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
    }
}

fn serialize_ts<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, true))
}

/// Provenance tag distinguishing user-submitted entries from any other origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Entered by the user through the log form / `moodlog log`.
    Manual,
    /// Any other origin, including legacy rows with no source column.
    Auto,
}

impl Source {
    /// Map a raw source field to a tag. `"manual"` (any case, surrounding
    /// whitespace ignored) is [`Source::Manual`]; everything else — empty,
    /// missing, or an unrecognized label — is [`Source::Auto`].
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("manual") {
            Source::Manual
        } else {
            Source::Auto
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Manual => write!(f, "manual"),
            Source::Auto => write!(f, "auto"),
        }
    }
}

/// A persisted row in one of the historical schema shapes.
///
/// The file accumulated rows under three schema versions: timestamp+emotion,
/// then +note, then +source. Each variant has exactly one normalization path
/// into [`MoodEntry`]; padding never happens implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    /// Oldest shape: `timestamp,emotion`.
    Two { timestamp: String, emotion: String },
    /// Middle shape: `timestamp,emotion,note`.
    Three {
        timestamp: String,
        emotion: String,
        note: String,
    },
    /// Canonical shape: `timestamp,emotion,note,source`.
    Four {
        timestamp: String,
        emotion: String,
        note: String,
        source: String,
    },
}

impl RawRecord {
    /// Classify a raw field list into a schema variant.
    ///
    /// Columns beyond the 4th are dropped. Fewer than 2 fields is a
    /// [`SchemaError`]: without at least timestamp+emotion there is nothing
    /// to recover, and guessing would corrupt the table.
    pub fn from_fields(fields: &[&str], line: u64) -> Result<Self, SchemaError> {
        match fields {
            [ts, emotion] => Ok(RawRecord::Two {
                timestamp: ts.to_string(),
                emotion: emotion.to_string(),
            }),
            [ts, emotion, note] => Ok(RawRecord::Three {
                timestamp: ts.to_string(),
                emotion: emotion.to_string(),
                note: note.to_string(),
            }),
            [ts, emotion, note, source, ..] => Ok(RawRecord::Four {
                timestamp: ts.to_string(),
                emotion: emotion.to_string(),
                note: note.to_string(),
                source: source.to_string(),
            }),
            short => Err(SchemaError {
                line,
                fields: short.len(),
            }),
        }
    }

    /// The raw timestamp field, common to every variant.
    pub fn timestamp(&self) -> &str {
        match self {
            RawRecord::Two { timestamp, .. }
            | RawRecord::Three { timestamp, .. }
            | RawRecord::Four { timestamp, .. } => timestamp,
        }
    }
}

/// Recommended closed emotion vocabulary.
///
/// The store accepts any label; this set only backs advisory checks in the
/// CLI (warn on a typo, offer the selection list).
pub static VOCABULARY: phf::Set<&'static str> = phf::phf_set! {
    "happy",
    "sad",
    "angry",
    "neutral",
    "surprise",
    "fear",
    "disgust",
};

/// Whether a normalized label is in the recommended vocabulary.
pub fn is_known_emotion(emotion: &str) -> bool {
    VOCABULARY.contains(emotion)
}
