//! Querying local files against the marker store.
//!
//! A query hashes candidate files, looks their digests up in the store,
//! and renders an auditable removal script for the hits. Nothing is ever
//! deleted here; the script is text for a human to review first.

pub mod engine;
pub mod script;
pub mod walker;

pub use engine::{Hit, QueryEngine, QueryError, QueryReport};
pub use script::write_removal_block;
pub use walker::MediaWalker;
