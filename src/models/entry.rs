use serde::{Deserialize, Serialize};

/// One checklist line from the movie log
///
/// `rating` is kept exactly as parsed, even on unwatched entries. Anything that
/// shows or aggregates ratings has to check `watched` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub title: String,
    pub rating: Option<f64>,
    pub watched: bool,
}

impl MovieEntry {
    pub fn new(title: impl Into<String>, rating: Option<f64>, watched: bool) -> Self {
        Self { title: title.into(), rating, watched }
    }

    /// Rating of a watched entry, `None` for unwatched or unrated ones
    pub fn watched_rating(&self) -> Option<f64> {
        if self.watched { self.rating } else { None }
    }
}

/// Contiguous run of entries under a `## YYYY` header
///
/// `year` is `None` only for the entries that precede the first header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub year: Option<String>,
    pub items: Vec<MovieEntry>,
}

impl Section {
    pub fn new(year: Option<String>) -> Self {
        Self { year, items: Vec::new() }
    }

    /// Headerless sections without items carry no information and are never emitted
    pub fn is_emittable(&self) -> bool {
        !self.items.is_empty() || self.year.is_some()
    }
}
