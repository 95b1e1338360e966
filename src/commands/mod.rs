//! Command handlers
//!
//! Each handler loads nothing itself: `main` resolves the configuration and
//! passes a [`CommandContext`].

pub mod clear;
pub mod compile;
pub mod path;
pub mod status;

use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;

use viewc::config::Config;
use viewc::infrastructure::fs::discover_templates;
use viewc::presentation::OutputFormat;

pub use clear::cmd_clear;
pub use compile::cmd_compile;
pub use path::cmd_path;
pub use status::cmd_status;

/// Settings shared by every handler
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub verbose: u8,
    pub unicode: bool,
}

impl CommandContext {
    pub fn new(config: Config, json: bool, verbose: u8) -> Self {
        Self {
            config,
            format: OutputFormat::from_json_flag(json),
            verbose,
            unicode: std::io::stdout().is_terminal(),
        }
    }
}

/// A template selected on the command line, before lookup
pub struct Selection {
    pub name: String,
    /// Already-resolved source path (set for `--all` discovery)
    pub source: Option<PathBuf>,
}

/// The explicit `names`, or every template under the source root
pub fn select_templates(config: &Config, names: Vec<String>) -> Result<Vec<Selection>> {
    if !names.is_empty() {
        return Ok(names
            .into_iter()
            .map(|name| Selection { name, source: None })
            .collect());
    }

    let root = &config.source.root;
    let found = discover_templates(root, &config.source.extensions)?;
    Ok(found
        .into_iter()
        .map(|source| Selection {
            name: display_name(root, &source),
            source: Some(source),
        })
        .collect())
}

fn display_name(root: &Path, source: &Path) -> String {
    source
        .strip_prefix(root)
        .unwrap_or(source)
        .to_string_lossy()
        .into_owned()
}
