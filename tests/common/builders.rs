//! Test builders — ergonomic constructors for `MoodEntry` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use moodlog_core::{MoodEntry, Source};

// ---------------------------------------------------------------------------
// MoodEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`MoodEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = MoodEntryBuilder::new("happy")
///     .note("went for a run")
///     .manual()
///     .at(2024, 1, 15, 8, 30, 0)
///     .build();
/// ```
pub struct MoodEntryBuilder {
    ts: DateTime<Utc>,
    emotion: String,
    note: String,
    source: Source,
}

impl MoodEntryBuilder {
    pub fn new(emotion: impl Into<String>) -> Self {
        Self {
            ts: fixed_ts(10, 0, 0),
            emotion: emotion.into(),
            note: String::new(),
            source: Source::Auto,
        }
    }

    pub fn ts(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }

    pub fn at(mut self, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Self {
        self.ts = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn manual(mut self) -> Self {
        self.source = Source::Manual;
        self
    }

    pub fn build(self) -> MoodEntry {
        MoodEntry {
            ts: self.ts,
            emotion: self.emotion,
            note: self.note,
            source: self.source,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A deterministic timestamp on the fixture day (2024-01-15, UTC).
pub fn fixed_ts(h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, h, mi, s).unwrap()
}

/// Build a manual entry with a note.
pub fn manual_entry(emotion: &str, note: &str) -> MoodEntry {
    MoodEntryBuilder::new(emotion).note(note).manual().build()
}

/// Build an auto entry without a note.
pub fn auto_entry(emotion: &str) -> MoodEntry {
    MoodEntryBuilder::new(emotion).build()
}

/// Build a small table spread over three fixture days.
pub fn build_table() -> Vec<MoodEntry> {
    vec![
        MoodEntryBuilder::new("happy").at(2024, 1, 14, 8, 0, 0).manual().build(),
        MoodEntryBuilder::new("sad").at(2024, 1, 14, 21, 30, 0).note("long day").build(),
        MoodEntryBuilder::new("happy").at(2024, 1, 15, 9, 0, 0).build(),
        MoodEntryBuilder::new("neutral").at(2024, 1, 15, 13, 0, 0).manual().build(),
        MoodEntryBuilder::new("angry").at(2024, 1, 16, 7, 45, 0).note("traffic").manual().build(),
        MoodEntryBuilder::new("happy").at(2024, 1, 16, 19, 0, 0).build(),
    ]
}
