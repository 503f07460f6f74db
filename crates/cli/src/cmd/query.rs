//! Query command implementation.

use std::io::Write;
use std::path::Path;

use takedex_core::query::QueryEngine;
use takedex_core::store::MarkerStore;

use crate::logging;

/// Run the query command, printing the removal script to stdout.
pub fn run(config: Option<&Path>, profile: Option<&str>, path: &Path) {
    let rc = super::load_config_or_exit(config, profile);
    logging::init(&rc);

    let store = MarkerStore::new(&rc.index_root);
    let engine = QueryEngine::new(&store);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(path, &mut out) {
        Ok(report) => {
            out.flush().ok();
            tracing::debug!(
                checked = report.files_checked,
                hits = report.hits,
                skipped = report.skipped,
                "query finished"
            );
        }
        Err(e) => {
            eprintln!("Error querying {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
