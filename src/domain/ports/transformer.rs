//! Transformer port - the pluggable source-to-artifact step
//!
//! A transformer must be deterministic and free of side effects: compiling the
//! same bytes twice yields the same artifact, which is what makes unlocked
//! concurrent compiles of one template harmless.

use std::path::Path;

use thiserror::Error;

/// A transformer rejected its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Converts template source bytes into compiled artifact bytes
pub trait Transformer {
    /// Transform the content of the template at `source`
    ///
    /// `source` is informational (for error messages or path-dependent
    /// prologues); implementations must not read it from disk.
    fn transform(&self, source: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError>;
}

/// Copies source bytes verbatim into the artifact
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transformer for Passthrough {
    fn transform(&self, _source: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError> {
        Ok(content.to_vec())
    }
}

impl<F> Transformer for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, TransformError>,
{
    fn transform(&self, _source: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError> {
        self(content)
    }
}
