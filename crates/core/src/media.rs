//! Recognized media file extensions.
//!
//! The set is shared by the archive scanner (advisory check) and the
//! query walker (hard filter). Matching is ASCII case-insensitive, so
//! both `IMG_0001.JPG` and `img_0001.jpg` qualify.

use std::path::Path;

/// Extensions of files that are considered media.
pub const MEDIA_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "tif", "mp4", "mov", "avi", "png"];

/// Check whether a path carries a recognized media extension.
pub fn is_media_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}
