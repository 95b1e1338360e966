//! Cache Root Value Object
//!
//! Where compiled artifacts live, or `Disabled` for pass-through mode where
//! every render reads the template source directly.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ViewError, ViewResult};

/// Configured cache location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheRoot {
    /// Caching is off; `compile` is a no-op
    #[default]
    Disabled,
    /// Artifacts are stored under this directory
    Enabled(PathBuf),
}

impl CacheRoot {
    /// Build an enabled cache root, rejecting an empty path
    pub fn new<P: Into<PathBuf>>(path: P) -> ViewResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ViewError::config("cache root path is empty"));
        }
        Ok(CacheRoot::Enabled(path))
    }

    /// Whether caching is enabled
    pub fn is_enabled(&self) -> bool {
        matches!(self, CacheRoot::Enabled(_))
    }

    /// The cache directory, if caching is enabled
    pub fn path(&self) -> Option<&Path> {
        match self {
            CacheRoot::Enabled(path) => Some(path),
            CacheRoot::Disabled => None,
        }
    }

    /// The cache directory, failing when a caller needs caching but it is off
    pub fn require(&self) -> ViewResult<&Path> {
        match self {
            CacheRoot::Enabled(path) if !path.as_os_str().is_empty() => Ok(path),
            CacheRoot::Enabled(_) => Err(ViewError::config("cache root path is empty")),
            CacheRoot::Disabled => Err(ViewError::config(
                "caching is disabled; no compiled path exists in pass-through mode",
            )),
        }
    }
}

impl fmt::Display for CacheRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheRoot::Enabled(path) => write!(f, "{}", path.display()),
            CacheRoot::Disabled => write!(f, "(disabled)"),
        }
    }
}
