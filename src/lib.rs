//! viewc - template compilation with a compiled-artifact cache
//!
//! Template sources are transformed into compiled artifacts that live under a
//! cache root. An artifact is reused while it is at least as new as its
//! source and regenerated otherwise. With caching disabled the compiler runs
//! in pass-through mode and renderers read sources directly.
//!
//! The crate is layered:
//!
//! - [`domain`] holds the storage/transformer ports, the path and freshness
//!   rules, and value objects
//! - [`application`] drives the check-then-compile flow
//! - [`infrastructure`] provides the local-disk and in-memory file stores
//! - [`config`] and [`presentation`] back the `viewc` CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileOutcome, Compiler, TemplateFinder, ViewCompiler};
pub use config::Config;
pub use domain::ports::{FileStore, Passthrough, TransformError, Transformer};
pub use domain::value_objects::CacheRoot;
pub use error::{ViewError, ViewResult};
pub use infrastructure::{LocalFs, MemoryFs};
