//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ViewError, ViewResult};
use crate::infrastructure::fs::user_config_path;

use super::env_validator::{closest, EnvVarValidator};
use super::types::{CacheLayout, Config, LogLevel};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "viewc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Roots are returned as written; [`discover`] anchors relative ones.
pub fn load_with_warnings(path: &Path) -> ViewResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| {
        ViewError::config(format!("cannot read config file {}: {}", path.display(), e))
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ViewError::config(format!("invalid config file {}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration
///
/// 1. `explicit` config file (must exist)
/// 2. `<project_dir>/viewc.toml`
/// 3. User config (`$XDG_CONFIG_HOME/viewc/config.toml`)
/// 4. Built-in defaults
///
/// `VIEWC_*` environment variables are applied on top, remaining relative
/// roots are resolved against `project_dir`, and the result is validated.
pub fn discover(
    project_dir: &Path,
    explicit: Option<&Path>,
) -> ViewResult<(Config, Vec<ConfigWarning>)> {
    let file = match explicit {
        Some(path) => Some(project_dir.join(path)),
        None => {
            let project_config = project_dir.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                Some(project_config)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    let config = config
        .with_env_overrides()
        .resolve_relative_to(project_dir);
    config.validate()?;

    Ok((config, warnings))
}

/// Apply environment variable overrides (VIEWC_* prefix)
///
/// `lookup` abstracts `std::env::var` so overrides can be tested without
/// touching the process environment.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // VIEWC_SOURCE_ROOT
    if let Some(root) = lookup("VIEWC_SOURCE_ROOT").filter(|v| !v.is_empty()) {
        config.source.root = PathBuf::from(root);
    }

    // VIEWC_CACHE_ROOT
    if let Some(root) = lookup("VIEWC_CACHE_ROOT").filter(|v| !v.is_empty()) {
        config.cache.root = Some(PathBuf::from(root));
    }

    // VIEWC_CACHE (on/off)
    if let Some(value) = lookup("VIEWC_CACHE") {
        const VALID: &[&str] = &["on", "off", "true", "false", "1", "0", "yes", "no"];
        config.cache.enabled = EnvVarValidator::new("VIEWC_CACHE", VALID).parse(
            &value,
            |v| match v.to_lowercase().as_str() {
                "on" | "true" | "1" | "yes" => Some(true),
                "off" | "false" | "0" | "no" => Some(false),
                _ => None,
            },
            config.cache.enabled,
        );
    }

    // VIEWC_CACHE_LAYOUT
    if let Some(value) = lookup("VIEWC_CACHE_LAYOUT") {
        config.cache.layout = EnvVarValidator::new("VIEWC_CACHE_LAYOUT", &["hashed", "mirrored"])
            .parse(
                &value,
                |v| match v.to_lowercase().as_str() {
                    "hashed" => Some(CacheLayout::Hashed),
                    "mirrored" => Some(CacheLayout::Mirrored),
                    _ => None,
                },
                config.cache.layout,
            );
    }

    // VIEWC_LOG
    if let Some(value) = lookup("VIEWC_LOG") {
        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        config.log.level = EnvVarValidator::new("VIEWC_LOG", LEVELS).parse(
            &value,
            |v| match v.to_lowercase().as_str() {
                "error" => Some(LogLevel::Error),
                "warn" => Some(LogLevel::Warn),
                "info" => Some(LogLevel::Info),
                "debug" => Some(LogLevel::Debug),
                "trace" => Some(LogLevel::Trace),
                _ => None,
            },
            config.log.level,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "root",
        "extensions",
        "cache",
        "enabled",
        "layout",
        "extension",
        "log",
        "level",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
