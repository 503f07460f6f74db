use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One named index. Profiles let indices for different accounts coexist,
/// each with its own root.
#[derive(Debug, Deserialize)]
pub struct Profile {
    pub index_root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration after profile selection and path expansion.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Root directory of the marker store for the active profile.
    pub index_root: PathBuf,
    pub logging: LoggingConfig,
}
