//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    HashedResolver, LayoutResolver, MirroredResolver, DEFAULT_ARTIFACT_EXTENSION,
};
use crate::domain::value_objects::CacheRoot;
use crate::error::{ViewError, ViewResult};

use super::loader::{self, ConfigWarning};

/// Template source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base directory searched for template sources
    #[serde(default = "default_source_root")]
    pub root: PathBuf,

    /// Extensions tried, in order, for names given without one
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_source_root(),
            extensions: default_extensions(),
        }
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("views")
}

fn default_extensions() -> Vec<String> {
    vec!["tpl".to_string(), "html".to_string()]
}

/// How artifact paths are derived from source paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheLayout {
    /// `<cache>/<sha256>.<ext>`
    #[default]
    Hashed,
    /// `<cache>/tree/<relative source path>.<ext>`
    Mirrored,
}

/// Compiled-artifact cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// `false` selects pass-through mode
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_cache_root")]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub layout: CacheLayout,

    /// Extension tag marking compiled artifacts
    #[serde(default = "default_artifact_extension")]
    pub extension: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root: default_cache_root(),
            layout: CacheLayout::default(),
            extension: default_artifact_extension(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_root() -> Option<PathBuf> {
    Some(PathBuf::from("storage/views"))
}

fn default_artifact_extension() -> String {
    DEFAULT_ARTIFACT_EXTENSION.to_string()
}

/// Log level used when neither `RUST_LOG` nor `-v` is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ViewResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ViewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a project directory
    ///
    /// Lookup order: `explicit` file, `<project_dir>/viewc.toml`, the user
    /// config file, then built-in defaults; `VIEWC_*` variables override all.
    pub fn discover(
        project_dir: &Path,
        explicit: Option<&Path>,
    ) -> ViewResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_dir, explicit)
    }

    /// Apply environment variable overrides (VIEWC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Make relative source/cache roots absolute against `base`
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        if self.source.root.is_relative() {
            self.source.root = base.join(&self.source.root);
        }
        if let Some(root) = self.cache.root.as_mut() {
            if root.is_relative() && !root.as_os_str().is_empty() {
                *root = base.join(&*root);
            }
        }
        self
    }

    /// Check the invariants the compiler relies on
    pub fn validate(&self) -> ViewResult<()> {
        if self.source.root.as_os_str().is_empty() {
            return Err(ViewError::config("source.root must not be empty"));
        }

        if self.cache.enabled {
            match &self.cache.root {
                Some(root) if !root.as_os_str().is_empty() => {}
                _ => {
                    return Err(ViewError::config(
                        "cache.root is required when cache.enabled = true",
                    ))
                }
            }
        }

        validate_tag("cache.extension", &self.cache.extension)?;
        for ext in &self.source.extensions {
            validate_tag("source.extensions", ext)?;
        }
        Ok(())
    }

    /// The cache root, or `Disabled` for pass-through mode
    pub fn cache_root(&self) -> ViewResult<CacheRoot> {
        if !self.cache.enabled {
            return Ok(CacheRoot::Disabled);
        }
        match &self.cache.root {
            Some(root) => CacheRoot::new(root.clone()),
            None => Err(ViewError::config(
                "cache.root is required when cache.enabled = true",
            )),
        }
    }

    /// The artifact path strategy selected by `cache.layout`
    pub fn resolver(&self) -> LayoutResolver {
        match self.cache.layout {
            CacheLayout::Hashed => {
                LayoutResolver::Hashed(HashedResolver::new(self.cache.extension.clone()))
            }
            CacheLayout::Mirrored => LayoutResolver::Mirrored(MirroredResolver::new(
                &self.source.root,
                self.cache.extension.clone(),
            )),
        }
    }
}

fn validate_tag(key: &str, tag: &str) -> ViewResult<()> {
    let bad = tag.is_empty()
        || tag.starts_with('.')
        || tag.contains(['/', '\\'])
        || tag.chars().any(char::is_whitespace);
    if bad {
        return Err(ViewError::config(format!(
            "{} contains an invalid extension '{}'",
            key, tag
        )));
    }
    Ok(())
}
