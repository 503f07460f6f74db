//! Purge command implementation.

use std::path::Path;

use takedex_core::store::{MarkerStore, PurgeOutcome};

use crate::logging;

/// Run the purge command, removing the whole index tree.
pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config_or_exit(config, profile);
    logging::init(&rc);

    let store = MarkerStore::new(&rc.index_root);
    match store.purge() {
        Ok(PurgeOutcome::Removed) => {
            println!("Files purged from {}", store.root().display());
        }
        Ok(PurgeOutcome::AlreadyEmpty) => {
            println!("Nothing to purge at {}", store.root().display());
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Purge failed, check {} for leftover files", store.root().display());
            std::process::exit(1);
        }
    }
}
