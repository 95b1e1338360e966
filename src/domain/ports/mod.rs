//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_store;
pub mod transformer;

pub use file_store::{FileStore, FsError, FsResult};
pub use transformer::{Passthrough, TransformError, Transformer};
