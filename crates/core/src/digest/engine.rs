//! Streaming digest computation.
//!
//! Content is hashed in bounded chunks so archive members and large video
//! files never have to reside in memory in full. The same entry point
//! serves both plain files and zip member streams.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest as _, Sha256};

use super::types::Digest;

/// Chunk size for streaming reads: 1 MiB.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Hash a byte stream to completion.
///
/// Read errors are propagated untouched; nothing is hashed incrementally
/// into any persistent state, so a failed stream leaves no trace.
pub fn digest_stream<R: Read>(reader: &mut R) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(Digest::new(hasher.finalize().into()))
}

/// Hash a regular file by path.
pub fn digest_file(path: &Path) -> io::Result<Digest> {
    let mut file = File::open(path)?;
    digest_stream(&mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HELLO_SHA256: &str = "a948904f2f0f479b8f8197694b30184b0d2ed1c1cd2a1ec0fb85d299a192a447";

    #[test]
    fn known_vector() {
        let mut input: &[u8] = b"abc";
        let digest = digest_stream(&mut input).unwrap();
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_stream() {
        let mut input: &[u8] = b"";
        let digest = digest_stream(&mut input).unwrap();
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn file_matches_stream() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, b"hello world\n").unwrap();

        let digest = digest_file(&path).unwrap();
        assert_eq!(digest.to_hex(), HELLO_SHA256);
    }

    #[test]
    fn content_spanning_multiple_chunks() {
        // 3 MiB of repeating bytes forces several chunked reads.
        let content = vec![0xabu8; 3 * 1024 * 1024];
        let mut whole: &[u8] = &content;
        let chunked = digest_stream(&mut whole).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, &content).unwrap();
        assert_eq!(digest_file(&path).unwrap(), chunked);
    }

    #[test]
    fn missing_file_propagates_error() {
        let err = digest_file(Path::new("/nonexistent/file.jpg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
