//! Removal script rendering.

use std::io::{self, Write};

use super::engine::Hit;

/// Write the auditable block for one confirmed duplicate.
///
/// Three comment lines (archive-original name, marker path, digest)
/// followed by the removal command. The shape is fixed; downstream
/// tooling may parse it.
pub fn write_removal_block(out: &mut impl Write, hit: &Hit) -> io::Result<()> {
    writeln!(out, "# In Google as: {}", hit.original_name)?;
    writeln!(out, "# {}", hit.marker_path.display())?;
    writeln!(out, "# {}", hit.digest)?;
    writeln!(
        out,
        "echo \"removing file {}, already in Google\"",
        hit.local_path.display()
    )?;
    writeln!(out, "rm \"{}\"", hit.local_path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;
    use std::path::PathBuf;

    #[test]
    fn block_shape_is_exact() {
        let hit = Hit {
            local_path: PathBuf::from("backup/test.jpg"),
            original_name: "Photos/2007/test.jpg".to_string(),
            marker_path: PathBuf::from("/home/u/.takedex/94a0/3e7b"),
            digest: Digest::from_hex(
                "94a03e7b0ebb0e0f5fdde15d2f78a150aa18f0c4bf8dbd92262dd49d8fd23216",
            )
            .unwrap(),
        };

        let mut out = Vec::new();
        write_removal_block(&mut out, &hit).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "# In Google as: Photos/2007/test.jpg\n\
             # /home/u/.takedex/94a0/3e7b\n\
             # 94a03e7b0ebb0e0f5fdde15d2f78a150aa18f0c4bf8dbd92262dd49d8fd23216\n\
             echo \"removing file backup/test.jpg, already in Google\"\n\
             rm \"backup/test.jpg\"\n"
        );
    }
}
