//! Zip archive scanning.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use zip::ZipArchive;

use crate::digest::digest_stream;
use crate::media::is_media_path;
use crate::store::{MarkerStore, StoreError};

use super::types::{FailureRecord, ScanReport};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open archive {0}: {1}")]
    Open(String, #[source] std::io::Error),

    #[error("failed to read archive {0}: {1}")]
    Archive(String, #[source] zip::result::ZipError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Scans archives member by member into a marker store.
pub struct ArchiveScanner<'a> {
    store: &'a MarkerStore,
}

impl<'a> ArchiveScanner<'a> {
    pub fn new(store: &'a MarkerStore) -> Self {
        Self { store }
    }

    /// Scan one archive.
    ///
    /// Directory entries are skipped, `.json` sidecars are skipped, and
    /// members with an unrecognized extension are warned about but still
    /// indexed. A member whose stream cannot be read to completion (a
    /// corrupted entry, typically a checksum mismatch) becomes a
    /// [`FailureRecord`] and the scan moves on; only a failure to open
    /// the archive itself, or to write into the marker store, aborts.
    pub fn scan(&self, archive_path: &Path) -> Result<ScanReport, ScanError> {
        let start = Instant::now();

        let file = File::open(archive_path)
            .map_err(|e| ScanError::Open(archive_path.display().to_string(), e))?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| ScanError::Archive(archive_path.display().to_string(), e))?;

        let mut report = ScanReport::default();

        for i in 0..archive.len() {
            let fallback_name = archive.name_for_index(i).map(str::to_owned);
            let mut member = match archive.by_index(i) {
                Ok(member) => member,
                Err(e) => {
                    let name = fallback_name.unwrap_or_else(|| format!("#{i}"));
                    tracing::warn!(member = %name, error = %e, "unreadable archive member");
                    report.members_seen += 1;
                    report.failed.push(FailureRecord {
                        archive: archive_path.to_path_buf(),
                        member: name,
                    });
                    continue;
                }
            };
            if member.is_dir() {
                continue;
            }
            report.members_seen += 1;

            let name = member.name().to_owned();
            let member_path = Path::new(&name);
            let ext = member_path.extension().and_then(|e| e.to_str());
            if ext.is_some_and(|e| e.eq_ignore_ascii_case("json")) {
                report.sidecars_skipped += 1;
                continue;
            }
            if !is_media_path(member_path) {
                // Advisory only; the archive producer decides what goes in.
                tracing::warn!(member = %name, "unrecognized extension, indexing anyway");
                report.unrecognized += 1;
            }

            match digest_stream(&mut member) {
                Ok(digest) => {
                    self.store.write(&digest, &name)?;
                    report.indexed += 1;
                }
                Err(e) => {
                    tracing::warn!(member = %name, error = %e, "member failed integrity check");
                    report.failed.push(FailureRecord {
                        archive: archive_path.to_path_buf(),
                        member: name,
                    });
                }
            }
        }

        report.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            archive = %archive_path.display(),
            indexed = report.indexed,
            failed = report.failed.len(),
            "archive scan finished"
        );
        Ok(report)
    }
}
