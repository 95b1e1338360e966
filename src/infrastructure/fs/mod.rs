//! File Store Implementations
//!
//! Concrete implementations of the FileStore port.

mod discover;
mod home;
mod local;
mod memory;

pub use discover::discover_templates;
pub use home::{user_config_path, viewc_config_dir, VIEWC_TEST_CONFIG_HOME_VAR};
pub use local::{atomic_write, LocalFs};
pub use memory::MemoryFs;
