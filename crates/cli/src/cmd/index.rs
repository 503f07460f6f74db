//! Index command implementation.

use std::path::{Path, PathBuf};

use takedex_core::index::{ArchiveScanner, EntryExtractor};
use takedex_core::store::MarkerStore;

use crate::extract::UnzipExtractor;
use crate::logging;

/// Run the index command over one or more archives.
pub fn run(config: Option<&Path>, profile: Option<&str>, archives: &[PathBuf]) {
    let rc = super::load_config_or_exit(config, profile);
    logging::init(&rc);

    let store = MarkerStore::new(&rc.index_root);
    let scanner = ArchiveScanner::new(&store);
    let extractor = UnzipExtractor;
    let mut had_errors = false;

    for archive in archives {
        println!("Indexing archive: {}", archive.display());
        match scanner.scan(archive) {
            Ok(report) => {
                println!("  members seen:     {}", report.members_seen);
                println!("  members indexed:  {}", report.indexed);
                if report.sidecars_skipped > 0 {
                    println!("  sidecars skipped: {}", report.sidecars_skipped);
                }
                if report.unrecognized > 0 {
                    println!("  unrecognized ext: {}", report.unrecognized);
                }
                println!("  duration:         {}ms", report.duration_ms);

                if !report.failed.is_empty() {
                    println!("Extracting {} failed member(s) in full....", report.failed.len());
                    for bad in &report.failed {
                        println!("  {}", bad.member);
                        if let Err(e) =
                            extractor.extract(&bad.archive, &bad.member, &store.failed_dir())
                        {
                            eprintln!("Error: {e}");
                            had_errors = true;
                        }
                    }
                    println!("Failed members land in: {}", store.failed_dir().display());
                }
            }
            Err(e) => {
                eprintln!("Error scanning {}: {}", archive.display(), e);
                had_errors = true;
            }
        }
    }

    if had_errors {
        std::process::exit(1);
    }
}
