use std::path::Path;

use takedex_core::config::{default_config_path, ConfigLoader};
use takedex_core::store::MarkerStore;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            let store = MarkerStore::new(&rc.index_root);
            println!("OK   tdx doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("index_root: {}", rc.index_root.display());
            println!("failed_dir: {}", store.failed_dir().display());
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL tdx doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
