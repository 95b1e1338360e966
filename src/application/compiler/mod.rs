//! Compiler Module
//!
//! Turns template sources into cached compiled artifacts on demand.
//!
//! ## Structure
//!
//! - `contract` - The `Compiler` trait renderers depend on
//! - `outcome` - Result of a check-then-compile (`CompileOutcome`)
//! - `view_compiler` - Shared orchestration over injected strategies (`ViewCompiler`)
//!
//! ## Usage
//!
//! ```
//! use std::path::Path;
//!
//! use viewc::application::compiler::{Compiler, ViewCompiler};
//! use viewc::domain::value_objects::CacheRoot;
//! use viewc::infrastructure::MemoryFs;
//!
//! let fs = MemoryFs::new();
//! fs.insert("/views/home.tpl", "<h1>Home</h1>");
//!
//! let compiler = ViewCompiler::new(fs, CacheRoot::new("/cache").unwrap());
//! let outcome = compiler.ensure_compiled(Path::new("/views/home.tpl")).unwrap();
//! assert!(outcome.was_compiled());
//! ```

mod contract;
mod outcome;
mod view_compiler;

pub use contract::Compiler;
pub use outcome::CompileOutcome;
pub use view_compiler::ViewCompiler;
