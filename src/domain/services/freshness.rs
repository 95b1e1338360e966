//! Freshness checks for compiled artifacts

use std::path::Path;

use crate::domain::ports::{FileStore, FsError};
use crate::error::{ViewError, ViewResult};

/// Decides whether a compiled artifact must be regenerated
pub trait FreshnessOracle {
    /// `true` if the artifact at `artifact` no longer reflects `source`
    ///
    /// A missing source is an error (`SourceNotFound`), never "stale".
    fn is_stale<FS>(&self, source: &Path, artifact: &Path, store: &FS) -> ViewResult<bool>
    where
        FS: FileStore + ?Sized;
}

/// Modification-time comparison
///
/// Stale when the artifact is missing or strictly older than its source.
/// Equal timestamps count as fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct MtimeOracle;

impl FreshnessOracle for MtimeOracle {
    fn is_stale<FS>(&self, source: &Path, artifact: &Path, store: &FS) -> ViewResult<bool>
    where
        FS: FileStore + ?Sized,
    {
        let source_mtime = store
            .last_modified(source)
            .map_err(|e| ViewError::source_read(source, e))?;

        let artifact_mtime = match store.last_modified(artifact) {
            Ok(mtime) => mtime,
            Err(FsError::NotFound(_)) => {
                tracing::debug!(source = %source.display(), "no compiled artifact yet");
                return Ok(true);
            }
            Err(e) => return Err(ViewError::Io(e.into_io())),
        };

        let stale = artifact_mtime < source_mtime;
        tracing::debug!(
            source = %source.display(),
            artifact = %artifact.display(),
            stale,
            "freshness check"
        );
        Ok(stale)
    }
}
