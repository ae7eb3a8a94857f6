//! Domain-specific assertion macros for moodlog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which normalization invariant was violated.

use moodlog_core::MoodEntry;

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that an entry has the expected emotion label.
///
/// ```rust
/// assert_emotion!(entry, "happy");
/// ```
#[macro_export]
macro_rules! assert_emotion {
    ($entry:expr, $emotion:expr) => {{
        let entry: &moodlog_core::MoodEntry = &$entry;
        let expected: &str = $emotion;
        if entry.emotion != expected {
            panic!(
                "assert_emotion! failed:\n  expected: {:?}\n  actual:   {:?}\n  ts: {}",
                expected, entry.emotion, entry.ts
            );
        }
    }};
}

/// Assert that an entry has the expected provenance tag.
#[macro_export]
macro_rules! assert_src {
    ($entry:expr, $source:expr) => {{
        let entry: &moodlog_core::MoodEntry = &$entry;
        let expected: moodlog_core::Source = $source;
        if entry.source != expected {
            panic!(
                "assert_src! failed:\n  expected: {:?}\n  actual:   {:?}\n  emotion: {:?}",
                expected, entry.source, entry.emotion
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set contains at least one entry matching a predicate.
#[macro_export]
macro_rules! assert_results_contain {
    ($results:expr, $pred:expr) => {{
        let results: &[moodlog_core::MoodEntry] = &$results;
        let pred = $pred;
        if !results.iter().any(pred) {
            panic!(
                "assert_results_contain! failed: no entry matched predicate.\n  {} entries checked.",
                results.len()
            );
        }
    }};
}

/// Assert that every entry in a result set satisfies a predicate.
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[moodlog_core::MoodEntry] = &$results;
        let pred = $pred;
        let failing: Vec<_> = results.iter().filter(|e| !pred(e)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} entries did not satisfy predicate.",
                failing.len(),
                results.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Canonical-schema invariant helpers
// ---------------------------------------------------------------------------

/// Assert that a loaded entry satisfies the canonical-schema invariants the
/// type system cannot enforce: a trimmed-lowercase emotion label. (`note` is
/// never null and `source` is always a valid tag by construction.)
pub fn assert_canonical(entry: &MoodEntry) {
    assert!(
        !entry.emotion.is_empty(),
        "canonical entry must have a non-empty emotion: {entry:?}"
    );
    assert_eq!(
        entry.emotion,
        entry.emotion.trim().to_lowercase(),
        "emotion must be trimmed lowercase: {entry:?}"
    );
}
