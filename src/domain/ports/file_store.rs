//! FileStore port - abstraction over the file I/O the compiler needs
//!
//! The compiler reads template sources and writes compiled artifacts only
//! through this trait, so the same orchestration runs against local disk or
//! an in-memory store.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// Result type for file store operations
pub type FsResult<T> = Result<T, FsError>;

/// File store operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }

    /// Convert back into a plain `io::Error`, keeping the error kind
    pub fn into_io(self) -> io::Error {
        match self {
            FsError::NotFound(path) => io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ),
            FsError::PermissionDenied(path) => io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ),
            FsError::Io { source, .. } => source,
        }
    }
}

/// Abstract file store interface
///
/// Implementations:
/// - `LocalFs` - local disk, atomic writes via temp file + rename
/// - `MemoryFs` - in-memory, with a controllable clock for freshness tests
pub trait FileStore {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Last modification time, read from the store on every call
    fn last_modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Read the full content of a file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Replace the content of a file
    ///
    /// Either the full new content becomes visible or the previous content
    /// stays in place.
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Overwrite the modification time of an existing file
    fn set_modified(&self, path: &Path, modified: SystemTime) -> FsResult<()>;

    /// Create a directory and its parents; an existing directory is not an error
    fn ensure_dir(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory tree; a missing directory is not an error
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}
