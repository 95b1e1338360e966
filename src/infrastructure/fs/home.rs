//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs (and on Windows ignores
//! environment variables entirely), so tests could never point it at a temp
//! directory. `viewc_config_dir()` checks, in order:
//! 1. `VIEWC_TEST_CONFIG_HOME` (test isolation)
//! 2. `XDG_CONFIG_HOME`
//! 3. `dirs::config_dir()`

use std::path::PathBuf;

/// Environment variable for test isolation of the user config directory.
pub const VIEWC_TEST_CONFIG_HOME_VAR: &str = "VIEWC_TEST_CONFIG_HOME";

/// Base directory holding `viewc/config.toml`.
///
/// # Example
///
/// ```
/// use viewc::infrastructure::fs::viewc_config_dir;
///
/// if let Some(dir) = viewc_config_dir() {
///     let user_config = dir.join("viewc/config.toml");
/// }
/// ```
pub fn viewc_config_dir() -> Option<PathBuf> {
    std::env::var_os(VIEWC_TEST_CONFIG_HOME_VAR)
        .or_else(|| std::env::var_os("XDG_CONFIG_HOME"))
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Path of the user-level config file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    viewc_config_dir().map(|dir| dir.join("viewc").join("config.toml"))
}
