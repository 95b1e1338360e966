//! Compile outcome types

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What `ensure_compiled` did for one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum CompileOutcome {
    /// Caching is disabled; render straight from this source path
    PassThrough(PathBuf),
    /// The cached artifact at this path was still valid
    Fresh(PathBuf),
    /// The artifact at this path was (re)generated
    Compiled(PathBuf),
}

impl CompileOutcome {
    /// The path the renderer should load
    pub fn path(&self) -> &Path {
        match self {
            CompileOutcome::PassThrough(path)
            | CompileOutcome::Fresh(path)
            | CompileOutcome::Compiled(path) => path,
        }
    }

    pub fn was_compiled(&self) -> bool {
        matches!(self, CompileOutcome::Compiled(_))
    }

    /// Short label for text output
    pub fn label(&self) -> &'static str {
        match self {
            CompileOutcome::PassThrough(_) => "pass-through",
            CompileOutcome::Fresh(_) => "fresh",
            CompileOutcome::Compiled(_) => "compiled",
        }
    }
}

impl std::fmt::Display for CompileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.path().display())
    }
}
