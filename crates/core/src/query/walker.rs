//! Recursive media file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::media::is_media_path;

/// Walker that yields media files under a directory.
///
/// Every directory is recursed into regardless of its name; hidden
/// directories are not special. Only the file filter applies: paths
/// without a recognized media extension are silently skipped.
#[derive(Debug)]
pub struct MediaWalker {
    root: PathBuf,
}

impl MediaWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree and return matching files, sorted for deterministic
    /// output. Entries that cannot be read are warned about and skipped;
    /// one unreadable subtree never aborts the walk.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %self.root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_media_path(path) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        files
    }
}
