//! The marker store: a filesystem tree used as a key-value store.
//!
//! Each indexed digest owns one leaf file (a marker) whose location is
//! derived from the digest's hex characters and whose content is the
//! archive-relative name that produced the digest. The store exclusively
//! owns the tree under its root; the scanner and query engine only go
//! through its operations.

pub mod marker;
pub mod shard;

pub use marker::{MarkerStore, PurgeOutcome, StoreError, FAILED_DIR_NAME};
pub use shard::{shard_path, GROUP_WIDTH};
