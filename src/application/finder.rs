//! Template lookup under the source root

use std::path::{Path, PathBuf};

use crate::domain::ports::FileStore;
use crate::domain::value_objects::TemplateName;
use crate::error::{ViewError, ViewResult};

/// Resolves template names (`views/home`, `emails/welcome.tpl`) to source paths
pub struct TemplateFinder<FS>
where
    FS: FileStore,
{
    fs: FS,
    source_root: PathBuf,
    extensions: Vec<String>,
}

impl<FS> TemplateFinder<FS>
where
    FS: FileStore,
{
    /// Create a finder over `source_root`, trying `extensions` in order
    pub fn new(fs: FS, source_root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            fs,
            source_root: source_root.into(),
            extensions,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Source path for `name`
    ///
    /// The name as written is tried first, then the name with each configured
    /// extension appended. Only regular files match, so a `users/` directory
    /// never shadows `users.tpl`. Names that are absolute or climb out of the source
    /// root are rejected as `InvalidConfiguration`.
    pub fn find(&self, name: &str) -> ViewResult<PathBuf> {
        let template = TemplateName::new(name)
            .map_err(|e| ViewError::config(format!("invalid template name '{}': {}", name, e)))?;

        let candidates = std::iter::once(template.clone()).chain(
            self.extensions
                .iter()
                .map(|ext| template.with_extension(ext)),
        );

        for candidate in candidates {
            let path = self.source_root.join(candidate.as_path());
            if self.fs.is_file(&path) {
                tracing::debug!(name, path = %path.display(), "resolved template");
                return Ok(path);
            }
        }

        Err(ViewError::SourceNotFound {
            path: self.source_root.join(template.as_path()),
        })
    }
}
