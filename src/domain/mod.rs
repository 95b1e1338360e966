//! Domain Layer
//!
//! The compile-cache rules without any I/O of their own.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (CacheRoot, TemplateName, PathDigest)
//! - `services/` - Path resolution and freshness strategies
//! - `ports/` - Interface definitions for infrastructure (FileStore, Transformer)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
