//! Application Layer
//!
//! Use cases that orchestrate the compile flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain the freshness or path rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ViewCompiler` - Check-then-compile of a template into the cache
//! - `TemplateFinder` - Resolve template names under the source root

pub mod compiler;
pub mod finder;

pub use compiler::{CompileOutcome, Compiler, ViewCompiler};
pub use finder::TemplateFinder;
