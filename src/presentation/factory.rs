//! Compiler Factory
//!
//! Creates the compiler and finder with infrastructure dependencies wired up.
//! This is the dependency injection point for the CLI.

use crate::application::{TemplateFinder, ViewCompiler};
use crate::config::Config;
use crate::domain::ports::Passthrough;
use crate::domain::services::{LayoutResolver, MtimeOracle};
use crate::error::ViewResult;
use crate::infrastructure::LocalFs;

/// Type alias for the compiler the CLI drives
pub type ConcreteCompiler = ViewCompiler<LocalFs, LayoutResolver, MtimeOracle, Passthrough>;

/// Type alias for the finder the CLI drives
pub type ConcreteFinder = TemplateFinder<LocalFs>;

/// Create a compiler for a validated configuration
///
/// A disabled cache yields a pass-through compiler.
pub fn create_compiler(config: &Config) -> ViewResult<ConcreteCompiler> {
    let cache_root = config.cache_root()?;
    Ok(ViewCompiler::with_strategies(
        LocalFs::new(),
        cache_root,
        config.resolver(),
        MtimeOracle,
        Passthrough,
    ))
}

/// Create a finder rooted at `source.root`
pub fn create_finder(config: &Config) -> ConcreteFinder {
    TemplateFinder::new(
        LocalFs::new(),
        config.source.root.clone(),
        config.source.extensions.clone(),
    )
}
