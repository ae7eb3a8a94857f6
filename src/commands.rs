//! Dashboard session commands.
//!
//! One CLI invocation is one session: load the table once, thread it through
//! the requested view, and for `log` merge the appended entry back into the
//! session table before reading it again.

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use moodlog_core::config::Config;
use moodlog_core::export::{self, ExportFormat};
use moodlog_core::normalizer::{normalize_emotion, parse_timestamp};
use moodlog_core::query::{self, Query};
use moodlog_core::types::{is_known_emotion, VOCABULARY};
use moodlog_core::{LoadOutcome, LogStore, MoodEntry, Source};

#[derive(Parser)]
#[command(name = "moodlog", about = "Mood journal — log and summarize emotional states")]
pub struct Cli {
    /// Path to the emotion log file (overrides the configured path).
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write debug logs to /tmp/moodlog-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log a mood entry.
    Log {
        /// Emotion label, e.g. happy, sad, angry, neutral, surprise, fear, disgust.
        emotion: String,
        /// Optional free-text note.
        #[arg(long)]
        note: Option<String>,
        /// Backfill timestamp instead of now, e.g. "2024-01-15 08:30:00".
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },
    /// Show recent entries, optionally filtered.
    Show {
        /// Number of trailing entries to show.
        #[arg(long)]
        last: Option<usize>,
        /// Restrict to these emotions (repeatable).
        #[arg(long = "emotion", value_name = "EMOTION")]
        emotions: Vec<String>,
        /// Earliest date to include (inclusive), YYYY-MM-DD.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date to include (inclusive), YYYY-MM-DD.
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Counts by emotion and by source.
    Summary,
    /// Entries that carry a note.
    Journal {
        /// Number of trailing noted entries to show.
        #[arg(long)]
        last: Option<usize>,
    },
    /// Emotion × date grid of observation counts.
    Calendar,
    /// Chronological per-day counts per emotion.
    Trend,
    /// Export the full table with header.
    Export {
        /// Output format: csv or jsonl.
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output file; stdout when absent.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

/// Run one dashboard session.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let path = cli.file.unwrap_or_else(|| config.store.path.clone());

    let store = LogStore::new(&path);
    store.ensure_initialized()?;
    let mut table = store
        .load()
        .with_context(|| format!("loading {}", path.display()))?;
    // The bootstrap header is data to the loader and always falls out under
    // the drop policy; only drops beyond it are worth telling the user about.
    let stray_drops = table
        .dropped
        .iter()
        .filter(|d| d.timestamp != "timestamp")
        .count();
    if stray_drops > 0 {
        eprintln!("note: {stray_drops} row(s) with unparsable timestamps were skipped");
    }

    match cli.command {
        Command::Log { emotion, note, at } => log_mood(&store, &mut table, emotion, note, at),
        Command::Show { last, emotions, from, to } => {
            let mut query = Query::new().emotions(emotions);
            if let Some(from) = from {
                query = query.from(from);
            }
            if let Some(to) = to {
                query = query.to(to);
            }
            let filtered = query.apply(&table.entries);
            let n = last.unwrap_or(config.display.recent_rows);
            print_entries(query::recent(&filtered, n), &config.display.timestamp_format);
            Ok(())
        }
        Command::Summary => {
            summary(&table);
            Ok(())
        }
        Command::Journal { last } => {
            let noted = query::journal(&table.entries);
            let n = last.unwrap_or(config.display.recent_rows);
            print_entries(query::recent(&noted, n), &config.display.timestamp_format);
            Ok(())
        }
        Command::Calendar => {
            calendar(&table);
            Ok(())
        }
        Command::Trend => {
            trend(&table);
            Ok(())
        }
        Command::Export { format, out } => export_table(&table, &format, out),
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

fn log_mood(
    store: &LogStore,
    table: &mut LoadOutcome,
    emotion: String,
    note: Option<String>,
    at: Option<String>,
) -> anyhow::Result<()> {
    let ts = match at {
        Some(raw) => match parse_timestamp(&raw) {
            Some(ts) => ts,
            None => bail!("unrecognized timestamp {raw:?}"),
        },
        None => Utc::now(),
    };

    let emotion = normalize_emotion(&emotion);
    if emotion.is_empty() {
        bail!("emotion must not be empty");
    }
    if !is_known_emotion(&emotion) {
        let mut known: Vec<&str> = VOCABULARY.iter().copied().collect();
        known.sort_unstable();
        eprintln!("note: {emotion:?} is not a common emotion label (known: {})", known.join(", "));
    }

    let entry = MoodEntry {
        ts,
        emotion,
        note: note.unwrap_or_default(),
        source: Source::Manual,
    };
    store.append(&entry).context("appending mood entry")?;
    tracing::debug!(emotion = %entry.emotion, "mood appended");

    // Keep the session table consistent with the file before reading it again.
    table.merge(entry.clone());

    let today = entry.date();
    let today_count = table.entries.iter().filter(|e| e.date() == today).count();
    println!("Mood '{}' logged! ({} entr{} today)", entry.emotion, today_count,
        if today_count == 1 { "y" } else { "ies" });
    Ok(())
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn print_entries(entries: &[MoodEntry], ts_format: &str) {
    if entries.is_empty() {
        println!("No entries.");
        return;
    }
    println!("{:<18} {:<10} {:<8} NOTE", "TIMESTAMP", "EMOTION", "SOURCE");
    for entry in entries {
        println!(
            "{:<18} {:<10} {:<8} {}",
            entry.ts.format(ts_format),
            entry.emotion,
            entry.source,
            entry.note
        );
    }
}

fn summary(table: &LoadOutcome) {
    let by_emotion = query::count_by(&table.entries, |e| e.emotion.clone());
    let by_source = query::count_by(&table.entries, |e| e.source);

    println!("Emotion counts:");
    for (emotion, count) in &by_emotion {
        println!("  {emotion:<10} {count}");
    }
    println!("Source breakdown:");
    for (source, count) in &by_source {
        println!("  {:<10} {count}", source.to_string());
    }
}

/// Emotions as rows, dates as columns, absent cells as 0.
fn calendar(table: &LoadOutcome) {
    let pivot = query::pivot_by_date_and_emotion(&table.entries);
    if pivot.is_empty() {
        println!("No entries yet.");
        return;
    }

    print!("{:<10}", "");
    for date in &pivot.dates {
        print!(" {date}");
    }
    println!();
    for emotion in &pivot.emotions {
        print!("{emotion:<10}");
        for date in &pivot.dates {
            print!(" {:>10}", pivot.count(*date, emotion));
        }
        println!();
    }
}

/// Dates as rows in chronological order, per-emotion counts plus a total.
fn trend(table: &LoadOutcome) {
    let pivot = query::pivot_by_date_and_emotion(&table.entries);
    if pivot.is_empty() {
        println!("No trend data available yet.");
        return;
    }

    print!("{:<12}", "DATE");
    for emotion in &pivot.emotions {
        print!(" {emotion:>10}");
    }
    println!(" {:>7}", "TOTAL");
    for date in &pivot.dates {
        print!("{:<12}", date.to_string());
        for emotion in &pivot.emotions {
            print!(" {:>10}", pivot.count(*date, emotion));
        }
        println!(" {:>7}", pivot.date_total(*date));
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn export_table(table: &LoadOutcome, format: &str, out: Option<PathBuf>) -> anyhow::Result<()> {
    let format = ExportFormat::from_str(format).map_err(anyhow::Error::msg)?;
    match out {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            export::write(format, file, &table.entries)?;
            println!("Exported {} entries to {}", table.entries.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            export::write(format, stdout.lock(), &table.entries)?;
        }
    }
    Ok(())
}
