//! Seam for the external extraction facility.
//!
//! Recovering a member that failed its integrity check means extracting
//! it from the original archive in full, into a holding area for manual
//! reprocessing. That extraction is performed by an external tool; the
//! core only defines the interface and invokes it.

use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to launch extraction of {member}: {source}")]
    Launch {
        member: String,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction of {member} failed with {status}")]
    Failed { member: String, status: ExitStatus },
}

/// Extracts a single archive member, in full, into a destination
/// directory.
pub trait EntryExtractor {
    fn extract(&self, archive: &Path, member: &str, dest: &Path) -> Result<(), ExtractError>;
}
