//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File store implementations (Local, Memory) and config dir lookup

pub mod fs;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
