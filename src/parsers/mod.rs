//! Parsers for the plain-text movie log
//!
//! The log is a checklist, one movie per line, optionally grouped by year headers:
//!
//! ```text
//! - [x] Alien - 8.4/10
//! ## 2024
//! - [x] Dune: Part Two – 9/10
//! - [ ] Furiosa
//! ```
//!
//! # Error Handling Strategy
//!
//! Parsing never fails. Lines that are neither a checklist entry nor a year header
//! (prose, blank lines, malformed checkboxes, unknown markers) are skipped silently, so
//! every function here is total over its input and needs no `Result`.

pub mod document;
pub mod line;

pub use document::{parse_entries, parse_sections, parse_year_header};
pub use line::parse_line;
