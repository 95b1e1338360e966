//! Configuration module for viewc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VIEWC_*)
//! 3. Explicit `--config` file or project `viewc.toml`
//! 4. User config (~/.config/viewc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CacheConfig, CacheLayout, Config, LogConfig, LogLevel, SourceConfig};
