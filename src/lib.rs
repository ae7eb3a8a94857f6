//! moodlog — mood journal CLI.
//!
//! Thin dashboard-session layer over [`moodlog_core`]: each invocation loads
//! the normalized table once, runs one view or mutation against it, and
//! exits. The pipeline layers live in `crates/moodlog-core`.
//!
//! ```text
//! Normalizer ──► Store ──► Query ──► CLI views
//!      │           │
//!      └───────────┴──► Export
//! ```

pub mod commands;

pub use moodlog_core::{LoadOutcome, LogStore, MoodEntry, Source};
