//! Movie Log - Parse and summarize a plain-text movie checklist
//!
//! The log is a checklist with optional ratings, grouped by year headers:
//!
//! ```text
//! - [x] Alien - 8.4/10
//! ## 2024
//! - [x] Dune: Part Two – 9/10
//! - [ ] Furiosa
//! ```
//!
//! This library provides:
//!
//! - Parsing single lines ([`parse_line`]) and whole documents, flat ([`parse_entries`])
//!   or split into year sections ([`parse_sections`])
//! - Statistics: watched/unwatched counts, average rating, top list and a rating
//!   histogram ([`compute_stats`])
//! - Views: newest-first timeline, ranking by rating and watchlist ([`views`])
//! - Retrieval of the log from a file or an HTTP URL ([`source`])
//!
//! # Example
//!
//! ```
//! use movie_log::{MovieLog, compute_stats, views};
//!
//! let log = MovieLog::parse("- [x] Alien - 8.4/10\n## 2024\n- [ ] Furiosa");
//! let stats = compute_stats(&log.entries);
//! assert_eq!(stats.watched_count, 1);
//! assert_eq!(views::watchlist(&log.entries)[0].title, "Furiosa");
//! ```

pub mod cli;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod render;
pub mod source;
pub mod stats;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use models::{MovieEntry, MovieLog, Section};
pub use parsers::{parse_entries, parse_line, parse_sections};
pub use stats::{Stats, compute_stats};
