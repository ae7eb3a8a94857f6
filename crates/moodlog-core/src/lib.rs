//! moodlog-core — mood journal core library.
//!
//! This crate exposes the pipeline layers of the mood log as public modules,
//! plus the shared types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Store ──► Query ──► CLI views
//!      │           │
//!      └───────────┴──► Export
//! ```
//!
//! Everything is single-threaded and synchronous: one dashboard session is
//! one linear pass (load → normalize → view → optionally append → merge).
//! The session table is an explicit value owned by the caller, never ambient
//! process state.

pub mod config;
pub mod export;
pub mod normalizer;
pub mod query;
pub mod store;
pub mod types;

pub use store::{LoadOutcome, LogStore, SchemaError, StoreError};
pub use types::{MoodEntry, RawRecord, Source};
