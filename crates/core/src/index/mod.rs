//! Archive indexing.
//!
//! The scanner walks every member of a zip-style archive, hashes member
//! streams through the digest engine and records markers. Integrity
//! failures on individual members never abort a scan; they are collected
//! and handed back so the caller can route them to an external
//! extraction facility for manual reprocessing.

pub mod extract;
pub mod scanner;
pub mod types;

pub use extract::{EntryExtractor, ExtractError};
pub use scanner::{ArchiveScanner, ScanError};
pub use types::{FailureRecord, ScanReport};
