//! Digest to filesystem path mapping.

use std::path::{Path, PathBuf};

use crate::digest::Digest;

/// Width of each path segment in hex characters.
pub const GROUP_WIDTH: usize = 4;

/// Resolve the shard path for a digest under an index root.
///
/// The 64-character hex digest is split into consecutive 4-character
/// groups; every group but the last becomes a nested directory name and
/// the final group is the leaf file name. The mapping is injective for a
/// fixed root: distinct digests never share a path.
pub fn shard_path(root: &Path, digest: &Digest) -> PathBuf {
    let hex = digest.to_hex();
    let mut path = root.to_path_buf();
    for start in (0..hex.len()).step_by(GROUP_WIDTH) {
        path.push(&hex[start..start + GROUP_WIDTH]);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST_A: &str = "94a03e7b0ebb0e0f5fdde15d2f78a150aa18f0c4bf8dbd92262dd49d8fd23216";
    const DIGEST_B: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn splits_into_four_char_groups() {
        let digest = Digest::from_hex(DIGEST_A).unwrap();
        let path = shard_path(Path::new("/tmp/idx"), &digest);
        assert_eq!(
            path,
            PathBuf::from(
                "/tmp/idx/94a0/3e7b/0ebb/0e0f/5fdd/e15d/2f78/a150/aa18/f0c4/bf8d/bd92/262d/d49d/8fd2/3216"
            )
        );
    }

    #[test]
    fn sixteen_groups_under_root() {
        let digest = Digest::from_hex(DIGEST_A).unwrap();
        let root = Path::new("/idx");
        let path = shard_path(root, &digest);
        let suffix = path.strip_prefix(root).unwrap();
        assert_eq!(suffix.components().count(), 16);
    }

    #[test]
    fn deterministic() {
        let digest = Digest::from_hex(DIGEST_B).unwrap();
        let root = Path::new("root");
        assert_eq!(shard_path(root, &digest), shard_path(root, &digest));
    }

    #[test]
    fn distinct_digests_distinct_paths() {
        let a = Digest::from_hex(DIGEST_A).unwrap();
        let b = Digest::from_hex(DIGEST_B).unwrap();
        let root = Path::new("root");
        assert_ne!(shard_path(root, &a), shard_path(root, &b));
    }
}
