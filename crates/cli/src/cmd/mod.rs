pub mod doctor;
pub mod index;
pub mod purge;
pub mod query;

use std::path::Path;

use takedex_core::config::{ConfigLoader, ResolvedConfig};

/// Load configuration or exit with the error; shared by every command.
pub fn load_config_or_exit(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}
