//! Reading outline text from wherever it lives.

use crate::error::{OutlineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
/// Where a [`DocumentIndex`](crate::index::DocumentIndex) gets its text.
pub enum OutlineSource {
    /// UTF-8 file on disk, read on each (re)load.
    File(PathBuf),
    /// In-memory text, used by tests and embedders.
    Text(String),
}

impl OutlineSource {
    /// Produce the full outline text.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::SourceUnavailable`] if the file is missing,
    /// unreadable, or not valid UTF-8.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => read_outline(path),
            Self::Text(text) => Ok(text.clone()),
        }
    }

    #[must_use]
    /// Human-readable location for log messages.
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Text(_) => "<inline text>".to_string(),
        }
    }
}

impl From<PathBuf> for OutlineSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Read an outline file into memory.
///
/// # Errors
///
/// Returns [`OutlineError::SourceUnavailable`] wrapping the I/O failure.
pub fn read_outline(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| OutlineError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
