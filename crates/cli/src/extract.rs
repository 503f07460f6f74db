//! External extraction facility backed by the system `unzip` tool.

use std::path::Path;
use std::process::Command;

use takedex_core::index::{EntryExtractor, ExtractError};

/// Extracts a single member in full by invoking `unzip`, the same way a
/// user would recover it by hand.
pub struct UnzipExtractor;

impl EntryExtractor for UnzipExtractor {
    fn extract(&self, archive: &Path, member: &str, dest: &Path) -> Result<(), ExtractError> {
        let status = Command::new("unzip")
            .arg("-o")
            .arg(archive)
            .arg(member)
            .arg("-d")
            .arg(dest)
            .status()
            .map_err(|e| ExtractError::Launch { member: member.to_string(), source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExtractError::Failed { member: member.to_string(), status })
        }
    }
}
