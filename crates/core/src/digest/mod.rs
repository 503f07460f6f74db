//! Digest computation for file content identity.
//!
//! A [`Digest`] is the sole identity criterion in takedex: two files with
//! equal content produce equal digests, and digest equality is treated as
//! evidence of identity.

pub mod engine;
pub mod types;

pub use engine::{digest_file, digest_stream};
pub use types::{Digest, DigestError};
