//! Retrieval of the movie log text
//!
//! # Error Handling Strategy
//!
//! Retrieval is the only step that can fail. [`DocumentSource::fetch`] reports failures
//! as `anyhow` errors with context; [`load_document`] is what the CLI calls, and it logs
//! the failure and degrades to an empty document, so a missing or unreachable log
//! renders as empty views and zeroed statistics. There is no retry.

pub mod file;
pub mod http;

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

pub use file::FileSource;
pub use http::HttpSource;

use crate::utils::expand_tilde;

/// Default location of the movie log, relative to the working directory
pub const DEFAULT_SOURCE: &str = "data/movies.txt";

/// Where the movie log text comes from
pub trait DocumentSource {
    /// Fetch the complete document text
    fn fetch(&self) -> Result<String>;

    /// Human-readable location for messages
    fn describe(&self) -> String;
}

fn is_http_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick a source for a `--source` value: `http(s)://` URLs go over HTTP, anything
/// else is a file path (with `~` expansion)
pub fn open_source(location: &str, timeout: Duration) -> Result<Box<dyn DocumentSource>> {
    if is_http_url(location) {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(expand_tilde(location))))
    }
}

/// Fetch the document, falling back to empty text on any retrieval error
pub fn load_document(source: &dyn DocumentSource) -> String {
    match source.fetch() {
        Ok(text) => {
            info!(source = %source.describe(), bytes = text.len(), "loaded movie log");
            text
        }
        Err(e) => {
            warn!(source = %source.describe(), "Failed to load movie log, showing an empty list: {:#}", e);
            String::new()
        }
    }
}
