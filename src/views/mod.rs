//! Presentation-ready projections of a parsed log
//!
//! These only filter and reorder what the parsers produced; nothing is re-parsed
//! and the input is never modified.

pub mod timeline;

pub use timeline::{TimelineRow, timeline};

use crate::models::{MovieEntry, Section};

/// Watched entries with a rating, highest rating first (ties keep input order)
pub fn ranked(entries: &[MovieEntry]) -> Vec<&MovieEntry> {
    let mut ranked: Vec<&MovieEntry> =
        entries.iter().filter(|e| e.watched_rating().is_some()).collect();
    sort_by_rating_desc(&mut ranked);
    ranked
}

/// Entries not watched yet, in input order
pub fn watchlist(entries: &[MovieEntry]) -> Vec<&MovieEntry> {
    entries.iter().filter(|e| !e.watched).collect()
}

/// Watched entries that carry no rating
///
/// Together with [`ranked`] and [`watchlist`] this covers every entry exactly once.
pub fn watched_unrated(entries: &[MovieEntry]) -> Vec<&MovieEntry> {
    entries.iter().filter(|e| e.watched && e.rating.is_none()).collect()
}

/// Sections reduced to their unwatched items; sections left empty are dropped
///
/// Document order is kept, pass the result to [`timeline`] for newest-first display.
pub fn watchlist_sections(sections: &[Section]) -> Vec<Section> {
    sections
        .iter()
        .map(|section| Section {
            year: section.year.clone(),
            items: section.items.iter().filter(|e| !e.watched).cloned().collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect()
}

/// Stable sort by rating, highest first; unrated entries sink to the end
pub(crate) fn sort_by_rating_desc(entries: &mut [&MovieEntry]) {
    entries.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));
}

fn rating_key(entry: &MovieEntry) -> f64 {
    entry.rating.unwrap_or(f64::NEG_INFINITY)
}
