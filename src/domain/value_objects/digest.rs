//! Path Digest Value Object
//!
//! SHA-256 of a normalized source path, used as the collision-free file name of
//! a compiled artifact.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathDigest(String);

impl PathDigest {
    /// Length of the hex representation
    pub const HEX_LEN: usize = 64;

    /// Digest the raw bytes of `path`
    ///
    /// Hashes the OS encoding rather than a lossy UTF-8 view so that two
    /// distinct non-UTF-8 paths never share a digest.
    pub fn of(path: &Path) -> Self {
        let hash = Sha256::digest(path.as_os_str().as_encoded_bytes());
        Self(format!("{:x}", hash))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
