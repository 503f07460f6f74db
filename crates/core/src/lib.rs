#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Content-addressed existence index for media archives.
//!
//! takedex records a SHA-256 digest for every media file found in a
//! zip-style backup archive, stored as a sharded tree of marker files
//! under a configurable index root. A candidate local file can later be
//! tested for "already backed up" without a database: re-hash it and
//! check whether the corresponding marker path exists.

pub mod config;
pub mod digest;
pub mod index;
pub mod media;
pub mod query;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
