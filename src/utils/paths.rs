use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Largest movie log accepted from disk or over HTTP: 10MB
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Expands a leading `~` or `~/` to the home directory
///
/// Paths without a tilde, and `~user` forms, are returned unchanged. If the home
/// directory cannot be determined the tilde is left as is.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use movie_log::utils::expand_tilde;
///
/// assert_eq!(expand_tilde("data/movies.txt"), PathBuf::from("data/movies.txt"));
/// ```
pub fn expand_tilde(raw: &str) -> PathBuf {
    expand_tilde_internal(raw, dirs::home_dir().as_deref())
}

pub(crate) fn expand_tilde_internal(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// Rejects a movie log of `size` bytes when it exceeds [`MAX_DOCUMENT_BYTES`]
///
/// `location` only names the document in the error message, so the same check
/// serves files (size from metadata) and HTTP bodies (size from the header or the
/// received bytes).
pub fn ensure_within_document_limit(size: u64, location: impl fmt::Display) -> Result<()> {
    if size > MAX_DOCUMENT_BYTES {
        bail!("Movie log too large: {} ({} bytes, max {} bytes)", location, size, MAX_DOCUMENT_BYTES);
    }
    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use movie_log::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/movies.txt");
/// // Returns "~/movies.txt" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
