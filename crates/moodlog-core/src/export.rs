//! Export — writes a session table to a downloadable format.
//!
//! CSV export carries the canonical header (unlike the persisted file, which
//! gets its header only at creation); JSONL writes one object per line. An
//! empty table is a valid export: header-only CSV, zero-line JSONL.

use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

use crate::store::HEADER;
use crate::types::MoodEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated with header row, same schema as the persisted file.
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" => Ok(ExportFormat::Jsonl),
            other => Err(format!("unknown export format {other:?}, expected csv or jsonl")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("export CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the table in the given format.
pub fn write<W: Write>(
    format: ExportFormat,
    writer: W,
    entries: &[MoodEntry],
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(writer, entries),
        ExportFormat::Jsonl => write_jsonl(writer, entries),
    }
}

/// CSV with header: the downloadable-table shape of the dashboard.
pub fn write_csv<W: Write>(writer: W, entries: &[MoodEntry]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER.split(','))?;
    for entry in entries {
        csv_writer.write_record([
            entry.ts_string().as_str(),
            entry.emotion.as_str(),
            entry.note.as_str(),
            entry.source.to_string().as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// One JSON object per line, keys in canonical column order.
pub fn write_jsonl<W: Write>(mut writer: W, entries: &[MoodEntry]) -> Result<(), ExportError> {
    for entry in entries {
        serde_json::to_writer(&mut writer, entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
