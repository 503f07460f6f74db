//! Configuration loading and profile resolution.

pub mod loader;
pub mod types;

pub use loader::{default_config_path, default_index_root, ConfigError, ConfigLoader};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
