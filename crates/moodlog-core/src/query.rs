//! Query — pure, order-preserving derived views over a session table.
//!
//! Nothing here touches the filesystem. Filters return new sequences with
//! relative order preserved; aggregations return sorted maps so views and
//! tests see deterministic ordering.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::normalizer::normalize_emotion;
use crate::types::MoodEntry;

/// Entries satisfying `pred`, in their original relative order.
pub fn filter<F>(entries: &[MoodEntry], pred: F) -> Vec<MoodEntry>
where
    F: Fn(&MoodEntry) -> bool,
{
    entries.iter().filter(|e| pred(e)).cloned().collect()
}

/// Conjunction of an emotion-set membership test and an inclusive date range.
///
/// An unset part matches everything, so the empty query is the identity
/// filter. Requested emotions are normalized the same way stored ones are,
/// so `Query` built from `" Happy "` matches entries loaded as `"happy"`.
#[derive(Debug, Clone, Default)]
pub struct Query {
    emotions: Option<BTreeSet<String>>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to entries whose emotion is in the given set.
    pub fn emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = emotions
            .into_iter()
            .map(|e| normalize_emotion(e.as_ref()))
            .collect();
        self.emotions = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// Earliest date to include (inclusive).
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Latest date to include (inclusive).
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn matches(&self, entry: &MoodEntry) -> bool {
        if let Some(emotions) = &self.emotions {
            if !emotions.contains(&entry.emotion) {
                return false;
            }
        }
        let date = entry.date();
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }

    /// Apply the query, preserving original relative order.
    pub fn apply(&self, entries: &[MoodEntry]) -> Vec<MoodEntry> {
        filter(entries, |e| self.matches(e))
    }
}

/// Frequency table over any derived key.
pub fn count_by<K, F>(entries: &[MoodEntry], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&MoodEntry) -> K,
{
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(key(entry)).or_insert(0) += 1;
    }
    counts
}

/// Sparse (date, emotion) → count pivot with sorted axes.
///
/// Cells with zero observations are absent from the map; [`Pivot::count`]
/// materializes them as 0 when the calendar or trend view densifies the grid.
#[derive(Debug, Clone, Default)]
pub struct Pivot {
    /// Distinct observation dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Distinct emotions, sorted.
    pub emotions: Vec<String>,
    cells: BTreeMap<(NaiveDate, String), usize>,
}

impl Pivot {
    /// Count for one cell; 0 when the cell is absent from the sparse map.
    pub fn count(&self, date: NaiveDate, emotion: &str) -> usize {
        self.cells
            .get(&(date, emotion.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Total observations on one date, across all emotions.
    pub fn date_total(&self, date: NaiveDate) -> usize {
        self.emotions.iter().map(|e| self.count(date, e)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Group entries by (calendar date, emotion) for the calendar and trend views.
pub fn pivot_by_date_and_emotion(entries: &[MoodEntry]) -> Pivot {
    let mut cells: BTreeMap<(NaiveDate, String), usize> = BTreeMap::new();
    for entry in entries {
        *cells
            .entry((entry.date(), entry.emotion.clone()))
            .or_insert(0) += 1;
    }

    let dates: BTreeSet<NaiveDate> = cells.keys().map(|(d, _)| *d).collect();
    let emotions: BTreeSet<String> = cells.keys().map(|(_, e)| e.clone()).collect();

    Pivot {
        dates: dates.into_iter().collect(),
        emotions: emotions.into_iter().collect(),
        cells,
    }
}

/// Entries carrying a non-empty note, in original order.
pub fn journal(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    filter(entries, |e| !e.note.is_empty())
}

/// The trailing `n` entries in file order.
pub fn recent(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
    let start = entries.len().saturating_sub(n);
    &entries[start..]
}
