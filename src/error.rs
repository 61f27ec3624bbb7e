//! Error types for loading and querying outlines.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop an outline from being produced or emitted.
///
/// Malformed heading lines and unknown ids are not errors: the parser absorbs
/// the former and lookups answer the latter with `None`.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// The outline source could not be read.
    #[error("outline source {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        /// Location that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Parsed data could not be encoded as JSON.
    #[error("failed to encode outline: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;
