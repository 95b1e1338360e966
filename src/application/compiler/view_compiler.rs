//! View compiler - the shared compile orchestration
//!
//! Composes a file store with three strategies (path resolution, freshness,
//! transformation). No locks are taken: two callers compiling the same
//! template race to write identical bytes and the last rename wins.
//!
//! Relative source paths are made absolute against the working directory
//! before resolution, so `views/home.tpl` and its absolute spelling share one
//! artifact.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::{FileStore, Passthrough, Transformer};
use crate::domain::services::{
    CompiledPathResolver, FreshnessOracle, HashedResolver, MtimeOracle,
};
use crate::domain::value_objects::CacheRoot;
use crate::error::{ViewError, ViewResult};

use super::contract::Compiler;

/// Compiler built from injected strategies
pub struct ViewCompiler<FS, R = HashedResolver, O = MtimeOracle, T = Passthrough>
where
    FS: FileStore,
    R: CompiledPathResolver,
    O: FreshnessOracle,
    T: Transformer,
{
    fs: FS,
    resolver: R,
    oracle: O,
    transformer: T,
    cache_root: CacheRoot,
}

impl<FS> ViewCompiler<FS>
where
    FS: FileStore,
{
    /// Compiler with the default strategies: hashed artifact names, mtime
    /// freshness, verbatim copy
    pub fn new(fs: FS, cache_root: CacheRoot) -> Self {
        Self::with_strategies(
            fs,
            cache_root,
            HashedResolver::default(),
            MtimeOracle,
            Passthrough,
        )
    }
}

impl<FS, R, O, T> ViewCompiler<FS, R, O, T>
where
    FS: FileStore,
    R: CompiledPathResolver,
    O: FreshnessOracle,
    T: Transformer,
{
    /// Compiler with every strategy supplied by the caller
    pub fn with_strategies(
        fs: FS,
        cache_root: CacheRoot,
        resolver: R,
        oracle: O,
        transformer: T,
    ) -> Self {
        Self {
            fs,
            resolver,
            oracle,
            transformer,
            cache_root,
        }
    }

    /// Swap the path resolver
    pub fn with_resolver<R2: CompiledPathResolver>(
        self,
        resolver: R2,
    ) -> ViewCompiler<FS, R2, O, T> {
        ViewCompiler::with_strategies(
            self.fs,
            self.cache_root,
            resolver,
            self.oracle,
            self.transformer,
        )
    }

    /// Swap the freshness oracle
    pub fn with_oracle<O2: FreshnessOracle>(self, oracle: O2) -> ViewCompiler<FS, R, O2, T> {
        ViewCompiler::with_strategies(
            self.fs,
            self.cache_root,
            self.resolver,
            oracle,
            self.transformer,
        )
    }

    /// Swap the transformer
    pub fn with_transformer<T2: Transformer>(
        self,
        transformer: T2,
    ) -> ViewCompiler<FS, R, O, T2> {
        ViewCompiler::with_strategies(
            self.fs,
            self.cache_root,
            self.resolver,
            self.oracle,
            transformer,
        )
    }

    /// The underlying file store
    pub fn store(&self) -> &FS {
        &self.fs
    }

    /// Delete the whole cache-root tree
    ///
    /// Missing cache roots are fine; in pass-through mode nothing happens.
    pub fn clear(&self) -> ViewResult<()> {
        let Some(root) = self.cache_root.path() else {
            return Ok(());
        };

        self.fs
            .remove_dir_all(root)
            .map_err(|e| ViewError::cache_write(root, e))?;
        tracing::info!(cache_root = %root.display(), "cleared compiled views");
        Ok(())
    }

    /// Resolve the artifact path, rejecting anything outside the cache root
    fn resolve_within_root(&self, source: &Path) -> ViewResult<PathBuf> {
        let root = self.cache_root.require()?;
        let artifact = self.resolver.resolve(source, &self.cache_root)?;

        if artifact == root || !artifact.starts_with(root) {
            return Err(ViewError::CacheWrite {
                path: artifact,
                source: io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("artifact path escapes cache root {}", root.display()),
                ),
            });
        }
        Ok(artifact)
    }

    /// Keep the artifact at least as new as the source it was built from
    ///
    /// A source stamped ahead of the store's clock would otherwise leave a
    /// freshly written artifact stale forever.
    fn stamp_not_older_than(&self, artifact: &Path, source_modified: SystemTime) -> ViewResult<()> {
        let written = self
            .fs
            .last_modified(artifact)
            .map_err(|e| ViewError::cache_write(artifact, e))?;
        if written >= source_modified {
            return Ok(());
        }

        self.fs
            .set_modified(artifact, source_modified)
            .map_err(|e| ViewError::cache_write(artifact, e))?;
        tracing::debug!(
            artifact = %artifact.display(),
            "source modified in the future, artifact mtime raised to match"
        );
        Ok(())
    }
}

fn absolute_source(source: &Path) -> ViewResult<Cow<'_, Path>> {
    if source.is_absolute() {
        return Ok(Cow::Borrowed(source));
    }
    Ok(Cow::Owned(std::path::absolute(source)?))
}

impl<FS, R, O, T> Compiler for ViewCompiler<FS, R, O, T>
where
    FS: FileStore,
    R: CompiledPathResolver,
    O: FreshnessOracle,
    T: Transformer,
{
    fn cache_root(&self) -> &CacheRoot {
        &self.cache_root
    }

    fn compiled_path(&self, source: &Path) -> ViewResult<PathBuf> {
        self.resolve_within_root(&absolute_source(source)?)
    }

    fn is_expired(&self, source: &Path) -> ViewResult<bool> {
        if !self.cache_root.is_enabled() {
            // No artifact ever exists without a cache, but a missing source
            // is still the caller's bug
            if !self.fs.exists(source) {
                return Err(ViewError::SourceNotFound {
                    path: source.to_path_buf(),
                });
            }
            return Ok(true);
        }

        let source = absolute_source(source)?;
        let artifact = self.resolve_within_root(&source)?;
        self.oracle.is_stale(&source, &artifact, &self.fs)
    }

    fn compile(&self, source: &Path) -> ViewResult<()> {
        if !self.cache_root.is_enabled() {
            tracing::trace!(source = %source.display(), "caching disabled, nothing to compile");
            return Ok(());
        }

        let source = absolute_source(source)?;
        let source = source.as_ref();
        let source_modified = self
            .fs
            .last_modified(source)
            .map_err(|e| ViewError::source_read(source, e))?;
        let content = self
            .fs
            .read(source)
            .map_err(|e| ViewError::source_read(source, e))?;
        let artifact = self.resolve_within_root(source)?;

        // Transform before touching the cache: a rejected template leaves
        // neither an artifact nor an empty directory behind
        let compiled = self
            .transformer
            .transform(source, &content)
            .map_err(|e| ViewError::Transformation {
                path: source.to_path_buf(),
                message: e.message,
            })?;

        if let Some(dir) = artifact.parent() {
            self.fs
                .ensure_dir(dir)
                .map_err(|e| ViewError::cache_write(dir, e))?;
        }

        self.fs
            .write(&artifact, &compiled)
            .map_err(|e| ViewError::cache_write(&artifact, e))?;
        self.stamp_not_older_than(&artifact, source_modified)?;

        tracing::info!(
            source = %source.display(),
            artifact = %artifact.display(),
            bytes = compiled.len(),
            "compiled template"
        );
        Ok(())
    }
}
