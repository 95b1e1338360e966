//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `--verbose`, `--config`) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// viewc - template compiler with a compiled-artifact cache
#[derive(Parser, Debug)]
#[command(name = "viewc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./viewc.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile templates whose cached artifact is missing or stale
    Compile {
        /// Template names, relative to the source root
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        names: Vec<String>,

        /// Compile every template under the source root
        #[arg(long)]
        all: bool,

        /// Recompile even when the artifact is fresh
        #[arg(short, long)]
        force: bool,
    },

    /// Show whether cached artifacts are fresh
    Status {
        /// Template names (default: every template under the source root)
        names: Vec<String>,
    },

    /// Print the artifact path for a template
    Path {
        /// Template name, relative to the source root
        name: String,
    },

    /// Remove every compiled artifact from the cache root
    Clear,
}
