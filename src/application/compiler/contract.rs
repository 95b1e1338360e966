//! The compiler capability exposed to renderers

use std::path::{Path, PathBuf};

use crate::domain::value_objects::CacheRoot;
use crate::error::ViewResult;

use super::outcome::CompileOutcome;

/// Produces usable compiled artifacts for template sources
pub trait Compiler {
    /// Where compiled artifacts are stored (or `Disabled`)
    fn cache_root(&self) -> &CacheRoot;

    /// Artifact path for `source`; no I/O
    ///
    /// Fails with `InvalidConfiguration` in pass-through mode.
    fn compiled_path(&self, source: &Path) -> ViewResult<PathBuf>;

    /// Whether the artifact for `source` must be regenerated
    ///
    /// Fails with `SourceNotFound` if the source is missing.
    fn is_expired(&self, source: &Path) -> ViewResult<bool>;

    /// Compile `source` into its artifact unconditionally
    ///
    /// A no-op in pass-through mode. On any failure the previous artifact,
    /// if there was one, is left untouched.
    fn compile(&self, source: &Path) -> ViewResult<()>;

    /// Check-then-compile: recompile only when the artifact is expired
    fn ensure_compiled(&self, source: &Path) -> ViewResult<CompileOutcome> {
        if !self.cache_root().is_enabled() {
            return Ok(CompileOutcome::PassThrough(source.to_path_buf()));
        }

        let artifact = self.compiled_path(source)?;
        if self.is_expired(source)? {
            self.compile(source)?;
            Ok(CompileOutcome::Compiled(artifact))
        } else {
            Ok(CompileOutcome::Fresh(artifact))
        }
    }
}
