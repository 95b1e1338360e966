//! Compiled Path Resolution
//!
//! Maps a template source path to the location of its compiled artifact under
//! the cache root. Resolution is purely lexical: no filesystem access, so the
//! same source always lands on the same artifact across calls and restarts.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{CacheRoot, PathDigest};
use crate::error::ViewResult;

/// Default extension tag of compiled artifacts
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "compiled";

/// Subdirectory holding mirrored artifacts
const TREE_DIR: &str = "tree";
/// Subdirectory holding digest-named artifacts of the mirrored layout
const HASH_DIR: &str = "hash";

/// Strategy for deriving artifact paths
///
/// Implementations must be deterministic and collision-free: distinct
/// sources never share an artifact path, and every result lies strictly
/// inside the cache root. Relative sources are hashed as written;
/// `ViewCompiler` only passes absolute ones.
pub trait CompiledPathResolver {
    /// Artifact path for `source` under `cache_root`
    ///
    /// Fails with `InvalidConfiguration` if caching is disabled.
    fn resolve(&self, source: &Path, cache_root: &CacheRoot) -> ViewResult<PathBuf>;
}

/// Lexically normalize a path: drop `.`, fold `name/..` pairs
///
/// `..` directly under the root stays at the root; leading `..` of a relative
/// path is kept since there is nothing to fold it into.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

fn artifact_file_name(digest: &PathDigest, extension: &str) -> String {
    format!("{}.{}", digest, extension)
}

/// `<cache>/<sha256(normalized source)>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedResolver {
    extension: String,
}

impl HashedResolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for HashedResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_EXTENSION)
    }
}

impl CompiledPathResolver for HashedResolver {
    fn resolve(&self, source: &Path, cache_root: &CacheRoot) -> ViewResult<PathBuf> {
        let root = cache_root.require()?;
        let digest = PathDigest::of(&normalize(source));
        Ok(root.join(artifact_file_name(&digest, &self.extension)))
    }
}

/// Mirrors the source tree under `<cache>/tree/`
///
/// `views/home.tpl` under the source root becomes
/// `<cache>/tree/views/home.tpl.<ext>`. Sources outside the source root fall
/// back to `<cache>/hash/<sha256>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredResolver {
    source_root: PathBuf,
    extension: String,
}

impl MirroredResolver {
    pub fn new(source_root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            source_root: normalize(source_root.as_ref()),
            extension: extension.into(),
        }
    }

    fn relative<'a>(&self, source: &'a Path) -> Option<&'a Path> {
        let rel = source.strip_prefix(&self.source_root).ok()?;
        let only_normal = rel
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        (only_normal && rel.file_name().is_some()).then_some(rel)
    }
}

impl CompiledPathResolver for MirroredResolver {
    fn resolve(&self, source: &Path, cache_root: &CacheRoot) -> ViewResult<PathBuf> {
        let root = cache_root.require()?;
        let source = normalize(source);

        match self.relative(&source) {
            Some(rel) => {
                let mut mirrored = root.join(TREE_DIR).join(rel).into_os_string();
                mirrored.push(".");
                mirrored.push(&self.extension);
                Ok(PathBuf::from(mirrored))
            }
            None => {
                let digest = PathDigest::of(&source);
                Ok(root
                    .join(HASH_DIR)
                    .join(artifact_file_name(&digest, &self.extension)))
            }
        }
    }
}

/// Resolver chosen at runtime from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutResolver {
    Hashed(HashedResolver),
    Mirrored(MirroredResolver),
}

impl CompiledPathResolver for LayoutResolver {
    fn resolve(&self, source: &Path, cache_root: &CacheRoot) -> ViewResult<PathBuf> {
        match self {
            LayoutResolver::Hashed(resolver) => resolver.resolve(source, cache_root),
            LayoutResolver::Mirrored(resolver) => resolver.resolve(source, cache_root),
        }
    }
}
