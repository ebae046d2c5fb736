use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::DocumentSource;
use crate::utils::{MAX_DOCUMENT_BYTES, ensure_within_document_limit, format_path_with_tilde};

/// Movie log stored on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<String> {
        // Size comes from the open handle, and the read is capped in case the file grows
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open movie log: {}", self.path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Failed to read file metadata: {}", self.path.display()))?
            .len();
        ensure_within_document_limit(size, self.path.display())?;

        let mut bytes = Vec::new();
        file.take(MAX_DOCUMENT_BYTES + 1)
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read movie log: {}", self.path.display()))?;
        ensure_within_document_limit(bytes.len() as u64, self.path.display())?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read movie log");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        format_path_with_tilde(&self.path)
    }
}
