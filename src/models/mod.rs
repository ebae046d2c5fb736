//! Data models for the movie log.
//!
//! - [`MovieEntry`] - One checklist line (title, optional rating, watched flag)
//! - [`Section`] - Entries grouped under a `## YYYY` header
//! - [`MovieLog`] - Both shapes of one parsed document, passed to views and stats
//!
//! All of them are plain values rebuilt on every parse; nothing is cached between calls.

pub mod entry;
pub mod log;

pub use entry::{MovieEntry, Section};
pub use log::MovieLog;
