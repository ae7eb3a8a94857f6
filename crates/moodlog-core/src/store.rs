//! Store — owns the on-disk log file and its normalized view.
//!
//! The file is append-only from the session's perspective: [`LogStore::load`]
//! reads the whole file into an in-memory table once per session, and
//! [`LogStore::append`] adds one row without touching existing content.
//! The store holds no long-lived state of its own; the session table lives
//! with the caller.

use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::normalizer::{self, DroppedRow};
use crate::types::{MoodEntry, RawRecord};

/// Canonical header, written exactly once when the file is created.
pub const HEADER: &str = "timestamp,emotion,note,source";

/// A row shape that cannot be coerced to the canonical schema.
///
/// Fewer than two fields means even timestamp+emotion cannot be recovered.
/// This is fatal for the whole load; the session must report it rather than
/// guess at the row's meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row at line {line} has {fields} field(s), need at least timestamp and emotion")]
pub struct SchemaError {
    /// 1-based line number of the offending row.
    pub line: u64,
    /// Number of fields the row actually had.
    pub fields: usize,
}

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("log file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("log file could not be read as CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of one load pass: the surviving table plus the rows it shed.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Normalized entries in file order.
    pub entries: Vec<MoodEntry>,
    /// Rows dropped for unparsable timestamps, with line and offending text.
    pub dropped: Vec<DroppedRow>,
}

impl LoadOutcome {
    /// Merge a just-appended entry into the session table.
    ///
    /// After a successful [`LogStore::append`] the on-disk file and the
    /// in-memory table have diverged; callers must merge (or reload) before
    /// any further read in the same session, or the new entry stays
    /// invisible until the next session.
    pub fn merge(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
    }
}

/// Handle to the persisted emotion log.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file containing only the canonical header if it does
    /// not exist yet. Idempotent: an existing file is left untouched.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, format!("{HEADER}\n"))?;
        tracing::debug!(path = %self.path.display(), "created empty log file");
        Ok(())
    }

    /// Read and normalize the whole file into a session table.
    ///
    /// Every row is treated as headerless data and coerced through
    /// [`RawRecord`]; header presence has drifted historically, and a stale
    /// header line simply fails timestamp parse and is dropped with the
    /// other unparsable rows. A row with fewer than two fields aborts the
    /// load with [`SchemaError`].
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut outcome = LoadOutcome::default();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let fields: Vec<&str> = record.iter().collect();
            let raw = RawRecord::from_fields(&fields, line)?;
            match normalizer::normalize(raw, line) {
                Ok(entry) => outcome.entries.push(entry),
                Err(dropped) => {
                    tracing::debug!(
                        line = dropped.line,
                        timestamp = %dropped.timestamp,
                        "dropping row with unparsable timestamp"
                    );
                    outcome.dropped.push(dropped);
                }
            }
        }

        if !outcome.dropped.is_empty() {
            tracing::warn!(
                dropped = outcome.dropped.len(),
                loaded = outcome.entries.len(),
                "load shed rows with unparsable timestamps"
            );
        }
        Ok(outcome)
    }

    /// Append one entry as a single CSV row, without a header and without
    /// reading existing content.
    ///
    /// The emotion is written as given; normalization happens on load.
    /// On error nothing may be assumed about persistence.
    pub fn append(&self, entry: &MoodEntry) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record([
            entry.ts_string().as_str(),
            entry.emotion.as_str(),
            entry.note.as_str(),
            entry.source.to_string().as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}
