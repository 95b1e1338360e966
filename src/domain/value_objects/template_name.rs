//! Template Name Value Object
//!
//! A validated template name as callers write it (`views/home.tpl`):
//! - Relative (resolved against the source root)
//! - No traversal components (..)
//! - Non-empty

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when template name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name contains traversal components (..)
    ContainsTraversal,
    /// Name is absolute when it must be relative to the source root
    AbsoluteNotAllowed,
    /// Name is empty
    Empty,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::ContainsTraversal => {
                write!(f, "template name contains traversal components (..)")
            }
            NameError::AbsoluteNotAllowed => {
                write!(f, "template name must be relative to the source root")
            }
            NameError::Empty => write!(f, "template name is empty"),
        }
    }
}

impl std::error::Error for NameError {}

/// A validated template name, relative to the source root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateName(PathBuf);

impl TemplateName {
    /// Create a new TemplateName after validation
    ///
    /// `.` components are dropped so `./views/home.tpl` and `views/home.tpl`
    /// name the same template.
    pub fn new<P: AsRef<Path>>(name: P) -> Result<Self, NameError> {
        let name = name.as_ref();

        if name.as_os_str().is_empty() {
            return Err(NameError::Empty);
        }

        if name.has_root() || name.is_absolute() {
            return Err(NameError::AbsoluteNotAllowed);
        }

        let mut cleaned = PathBuf::new();
        for component in name.components() {
            match component {
                Component::Normal(part) => cleaned.push(part),
                Component::CurDir => {}
                Component::ParentDir => return Err(NameError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(NameError::AbsoluteNotAllowed)
                }
            }
        }

        if cleaned.as_os_str().is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Self(cleaned))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Whether the name already carries a file extension
    pub fn has_extension(&self) -> bool {
        self.0.extension().is_some()
    }

    /// Same name with `ext` appended as extension (`home` → `home.tpl`)
    pub fn with_extension(&self, ext: &str) -> Self {
        let mut name = self.0.clone().into_os_string();
        name.push(".");
        name.push(ext);
        Self(PathBuf::from(name))
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for TemplateName {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for TemplateName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
