//! Query execution against the marker store.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::digest::{digest_file, Digest};
use crate::store::{MarkerStore, StoreError};

use super::script::write_removal_block;
use super::walker::MediaWalker;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("path does not exist: {0}")]
    Missing(String),

    #[error("failed to hash {0}: {1}")]
    Hash(String, #[source] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write removal script: {0}")]
    Output(#[source] io::Error),
}

/// One file confirmed to be already backed up.
#[derive(Debug, Clone)]
pub struct Hit {
    /// The candidate file as the user referred to it.
    pub local_path: PathBuf,
    /// Archive-relative name recorded in the marker.
    pub original_name: String,
    /// The marker path that matched.
    pub marker_path: PathBuf,
    /// Digest of the candidate's content.
    pub digest: Digest,
}

/// Statistics from one query run.
#[derive(Debug, Clone, Default)]
pub struct QueryReport {
    /// Candidate files hashed and looked up.
    pub files_checked: usize,
    /// Files found in the index.
    pub hits: usize,
    /// Files skipped because they could not be read.
    pub skipped: usize,
}

/// Hashes candidates and renders removal blocks for index hits.
pub struct QueryEngine<'a> {
    store: &'a MarkerStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a MarkerStore) -> Self {
        Self { store }
    }

    /// Check one candidate file against the index.
    ///
    /// A miss means "not yet backed up" and is not an error.
    pub fn check(&self, path: &Path) -> Result<Option<Hit>, QueryError> {
        let digest =
            digest_file(path).map_err(|e| QueryError::Hash(path.display().to_string(), e))?;
        match self.store.lookup(&digest)? {
            Some(original_name) => Ok(Some(Hit {
                local_path: strip_dot_prefix(path).to_path_buf(),
                original_name,
                marker_path: self.store.marker_path(&digest),
                digest,
            })),
            None => Ok(None),
        }
    }

    /// Query a file or a directory tree, writing removal blocks for every
    /// hit.
    ///
    /// A directory is walked recursively with the media-extension filter;
    /// a file given explicitly is checked whatever its extension. During
    /// a walk, an unreadable candidate is warned about and skipped rather
    /// than aborting the run.
    pub fn run(&self, path: &Path, out: &mut impl Write) -> Result<QueryReport, QueryError> {
        let mut report = QueryReport::default();

        if path.is_dir() {
            for file in MediaWalker::new(path).walk() {
                match self.check(&file) {
                    Ok(hit) => {
                        report.files_checked += 1;
                        self.emit(hit, &mut report, out)?;
                    }
                    Err(QueryError::Hash(file, e)) => {
                        tracing::warn!(file = %file, error = %e, "skipping unreadable candidate");
                        report.skipped += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        } else if path.is_file() {
            report.files_checked = 1;
            let hit = self.check(path)?;
            self.emit(hit, &mut report, out)?;
        } else {
            return Err(QueryError::Missing(path.display().to_string()));
        }

        Ok(report)
    }

    fn emit(
        &self,
        hit: Option<Hit>,
        report: &mut QueryReport,
        out: &mut impl Write,
    ) -> Result<(), QueryError> {
        if let Some(hit) = hit {
            report.hits += 1;
            write_removal_block(out, &hit).map_err(QueryError::Output)?;
        }
        Ok(())
    }
}

/// Drop a leading `./` so script lines read the way the user typed the
/// path, not the way the walker produced it.
fn strip_dot_prefix(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
