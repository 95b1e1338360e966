//! Error types for viewc
//!
//! Every failure of the compile pipeline is terminal and surfaced to the
//! caller; nothing in the crate retries or degrades on its own.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for viewc operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Main error type for viewc operations
#[derive(Error, Debug)]
pub enum ViewError {
    /// The requested template source does not exist
    #[error("template source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The cache directory or a compiled artifact could not be created or written
    #[error("cannot write compiled artifact {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The injected transformation rejected the template source
    #[error("failed to compile {path}: {message}")]
    Transformation { path: PathBuf, message: String },

    /// Missing or malformed cache/source root configuration
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewError {
    /// Shorthand for an [`ViewError::InvalidConfiguration`] with a message
    pub fn config(message: impl Into<String>) -> Self {
        ViewError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Map a failed read of a template source
    ///
    /// A missing file becomes [`ViewError::SourceNotFound`] for `source`;
    /// anything else is a plain I/O error.
    pub fn source_read(source: &Path, err: FsError) -> Self {
        match err {
            FsError::NotFound(_) => ViewError::SourceNotFound {
                path: source.to_path_buf(),
            },
            other => ViewError::Io(other.into_io()),
        }
    }

    /// Map a failed cache directory or artifact write
    pub fn cache_write(path: &Path, err: FsError) -> Self {
        ViewError::CacheWrite {
            path: path.to_path_buf(),
            source: err.into_io(),
        }
    }

    /// Whether this error means the template itself is missing
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, ViewError::SourceNotFound { .. })
    }

    /// Whether this error came from the cache directory rather than the template
    pub fn is_cache_write(&self) -> bool {
        matches!(self, ViewError::CacheWrite { .. })
    }
}
