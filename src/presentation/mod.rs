//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the compiler with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```no_run
//! use viewc::application::Compiler;
//! use viewc::config::Config;
//! use viewc::presentation::factory;
//!
//! let config = Config::default().resolve_relative_to(std::path::Path::new("/srv/app"));
//! let compiler = factory::create_compiler(&config)?;
//! let finder = factory::create_finder(&config);
//! let outcome = compiler.ensure_compiled(&finder.find("home")?)?;
//! println!("{}", outcome);
//! # Ok::<(), viewc::ViewError>(())
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_compiler, create_finder, ConcreteCompiler};
pub use output::OutputFormat;
