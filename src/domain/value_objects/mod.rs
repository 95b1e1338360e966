//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_root;
mod digest;
mod template_name;

pub use cache_root::CacheRoot;
pub use digest::PathDigest;
pub use template_name::{NameError, TemplateName};
