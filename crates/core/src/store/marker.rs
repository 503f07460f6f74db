//! Marker file creation, lookup and purge.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::digest::Digest;

use super::shard::shard_path;

/// Reserved subdirectory for full extractions of archive members that
/// failed integrity checks during indexing. Never part of the shard tree
/// because shard segments are 4-character hex strings.
pub const FAILED_DIR_NAME: &str = "FAILED";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create marker directory {0}: {1}")]
    CreateDir(String, #[source] io::Error),

    #[error("failed to write marker {0}: {1}")]
    WriteMarker(String, #[source] io::Error),

    #[error("failed to read marker {0}: {1}")]
    ReadMarker(String, #[source] io::Error),

    #[error("failed to remove index root {0}: {1}")]
    Purge(String, #[source] io::Error),
}

/// Outcome of a purge, distinguishing "removed a tree" from "there was
/// nothing to remove".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Removed,
    AlreadyEmpty,
}

/// Filesystem-backed marker store rooted at a configured directory.
///
/// The root is created lazily as markers are written; it persists across
/// invocations until purged.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    root: PathBuf,
}

impl MarkerStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory receiving extracted copies of failed archive members.
    pub fn failed_dir(&self) -> PathBuf {
        self.root.join(FAILED_DIR_NAME)
    }

    /// Resolve the marker path for a digest without touching the disk.
    pub fn marker_path(&self, digest: &Digest) -> PathBuf {
        shard_path(&self.root, digest)
    }

    /// Record a digest, storing the original archive-relative name as the
    /// marker content. Overwrites an existing marker; when the previous
    /// content named a different original, the replacement is surfaced as
    /// a warning so duplicate filenames stay auditable.
    pub fn write(&self, digest: &Digest, original_name: &str) -> Result<(), StoreError> {
        let path = self.marker_path(digest);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::CreateDir(parent.display().to_string(), e))?;
        }
        if let Ok(existing) = fs::read_to_string(&path) {
            if existing != original_name {
                tracing::warn!(
                    digest = %digest,
                    previous = %existing,
                    replacement = %original_name,
                    "identical content indexed under a different name; keeping the newer name"
                );
            }
        }
        fs::write(&path, original_name)
            .map_err(|e| StoreError::WriteMarker(path.display().to_string(), e))
    }

    /// Look up the original name recorded for a digest.
    ///
    /// An absent marker, including a wholly absent index root, is a miss,
    /// not an error.
    pub fn lookup(&self, digest: &Digest) -> Result<Option<String>, StoreError> {
        let path = self.marker_path(digest);
        match fs::read_to_string(&path) {
            Ok(name) => Ok(Some(name)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadMarker(path.display().to_string(), e)),
        }
    }

    /// Remove the entire tree under the index root.
    ///
    /// Purging a nonexistent root succeeds as [`PurgeOutcome::AlreadyEmpty`].
    /// Any other failure carries the root path so the caller can direct
    /// the user to inspect it.
    pub fn purge(&self) -> Result<PurgeOutcome, StoreError> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(PurgeOutcome::Removed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PurgeOutcome::AlreadyEmpty),
            Err(e) => Err(StoreError::Purge(self.root.display().to_string(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DIGEST: &str = "94a03e7b0ebb0e0f5fdde15d2f78a150aa18f0c4bf8dbd92262dd49d8fd23216";

    fn digest() -> Digest {
        Digest::from_hex(DIGEST).unwrap()
    }

    #[test]
    fn write_then_lookup() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("idx"));

        store.write(&digest(), "Photos/2007/test.jpg").unwrap();
        let name = store.lookup(&digest()).unwrap();
        assert_eq!(name.as_deref(), Some("Photos/2007/test.jpg"));
    }

    #[test]
    fn lookup_against_missing_root_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("never-created"));
        assert_eq!(store.lookup(&digest()).unwrap(), None);
    }

    #[test]
    fn write_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("idx"));

        store.write(&digest(), "a.jpg").unwrap();
        store.write(&digest(), "a.jpg").unwrap();
        assert_eq!(store.lookup(&digest()).unwrap().as_deref(), Some("a.jpg"));
    }

    #[test]
    fn last_write_wins_for_duplicate_content() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("idx"));

        store.write(&digest(), "first-name.jpg").unwrap();
        store.write(&digest(), "second-name.jpg").unwrap();
        assert_eq!(
            store.lookup(&digest()).unwrap().as_deref(),
            Some("second-name.jpg")
        );
    }

    #[test]
    fn marker_lands_at_shard_path() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("idx");
        let store = MarkerStore::new(&root);

        store.write(&digest(), "x.jpg").unwrap();
        let expected = crate::store::shard_path(&root, &digest());
        assert!(expected.is_file());
    }

    #[test]
    fn purge_removes_everything() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("idx");
        let store = MarkerStore::new(&root);

        store.write(&digest(), "x.jpg").unwrap();
        assert_eq!(store.purge().unwrap(), PurgeOutcome::Removed);
        assert!(!root.exists());
        assert_eq!(store.lookup(&digest()).unwrap(), None);
    }

    #[test]
    fn purge_of_missing_root_is_already_empty() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("idx"));
        assert_eq!(store.purge().unwrap(), PurgeOutcome::AlreadyEmpty);
    }

    #[test]
    fn write_after_purge_recreates_the_tree() {
        let dir = TempDir::new().unwrap();
        let store = MarkerStore::new(dir.path().join("idx"));

        store.write(&digest(), "x.jpg").unwrap();
        store.purge().unwrap();
        store.write(&digest(), "y.jpg").unwrap();
        assert_eq!(store.lookup(&digest()).unwrap().as_deref(), Some("y.jpg"));
    }
}
