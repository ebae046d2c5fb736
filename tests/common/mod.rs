//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for movie log documents written to a temporary directory
pub struct MovieLogBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
    line_ending: &'static str,
}

impl MovieLogBuilder {
    /// Create a new builder with an empty document
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new(), line_ending: "\n" }
    }

    /// Append a watched entry with a rating
    pub fn watched(mut self, title: &str, rating: &str) -> Self {
        self.lines.push(format!("- [x] {} - {}/10", title, rating));
        self
    }

    /// Append a watched entry without a rating
    pub fn watched_unrated(mut self, title: &str) -> Self {
        self.lines.push(format!("- [x] {}", title));
        self
    }

    /// Append an unwatched entry
    pub fn unwatched(mut self, title: &str) -> Self {
        self.lines.push(format!("- [ ] {}", title));
        self
    }

    /// Append a `## YYYY` header
    pub fn year(mut self, year: &str) -> Self {
        self.lines.push(format!("## {}", year));
        self
    }

    /// Append a raw line verbatim
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Use CRLF line endings
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Document text as it would be written to disk
    pub fn text(&self) -> String {
        self.lines.join(self.line_ending)
    }

    /// Write the document to `movies.txt` and return the temp dir and file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("movies.txt");
        fs::write(&path, self.text()).expect("Failed to write movies.txt");
        (self.temp_dir, path)
    }
}

impl Default for MovieLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw text to a `movies.txt` in a fresh temp dir
pub fn write_log(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("movies.txt");
    fs::write(&path, content).expect("Failed to write movies.txt");
    (temp_dir, path)
}

/// A few years of history with every kind of line
pub fn realistic_log() -> MovieLogBuilder {
    MovieLogBuilder::new()
        .line("# Movies")
        .watched("The Matrix", "9")
        .unwatched("Stalker")
        .year("2023")
        .watched("Oppenheimer", "8.8")
        .watched_unrated("Barbie")
        .unwatched("Asteroid City")
        .line("notes: rewatch Heat")
        .year("2024")
        .watched("Dune: Part Two", "9.5")
        .watched("Civil War", "7.4")
        .line("- [x] Challengers: 8/10")
        .unwatched("Furiosa")
        .line("- [ ] Nosferatu -")
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}
