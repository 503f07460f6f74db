//! The `Digest` newtype and its hex representation.

use thiserror::Error;

/// Number of hex characters in a rendered digest.
pub const HEX_LEN: usize = 64;

/// Errors from parsing a hex digest string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    /// The string is not exactly 64 characters long.
    #[error("digest must be {HEX_LEN} hex characters, got {0}")]
    BadLength(usize),

    /// The string contains a character outside `[0-9a-fA-F]`.
    #[error("digest contains a non-hex character: {0:?}")]
    BadChar(char),
}

/// A SHA-256 content digest.
///
/// Constructed by the digest engine from file content, or parsed from a
/// 64-character hex string. Malformed digests are unrepresentable, which
/// keeps the shard path resolver total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string, either case.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let s = s.trim();
        if s.chars().count() != HEX_LEN {
            return Err(DigestError::BadLength(s.chars().count()));
        }
        let mut bytes = [0u8; 32];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_val(pair[0]).ok_or(DigestError::BadChar(pair[0] as char))?;
            let lo = hex_val(pair[1]).ok_or(DigestError::BadChar(pair[1] as char))?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
