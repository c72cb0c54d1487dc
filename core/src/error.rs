//! Common error types for codegraph.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading codegraph documents.
#[derive(Debug, Error)]
pub enum CodegraphError {
    /// A required document does not exist.
    #[error("missing file: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A document exists but could not be read.
    #[error("failed to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CodegraphError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingFile { path }
        } else {
            Self::Read { path, source }
        }
    }

    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}

/// Result type for document loading.
pub type CodegraphResult<T> = Result<T, CodegraphError>;
