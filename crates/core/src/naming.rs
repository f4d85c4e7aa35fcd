//! Derived file names for artifacts.
//!
//! - compressing `example.txt` writes `example.txt.huf`
//! - decompressing `example.txt.huf` writes `example_unc.txt`

use std::path::{Path, PathBuf};

/// Suffix appended to compressed artifacts.
pub const COMPRESSED_SUFFIX: &str = ".huf";

/// Marker appended to the stem of decompressed output.
pub const UNCOMPRESSED_MARKER: &str = "_unc";

/// `name` with [`COMPRESSED_SUFFIX`] appended.
pub fn compressed_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}{COMPRESSED_SUFFIX}"))
}

/// Output path for decompressing `name`.
///
/// A trailing `.huf` is dropped, then `_unc` goes between the file stem and
/// its extension. A name without an extension just gets `_unc` appended.
pub fn decompressed_path(name: &str) -> PathBuf {
    let original = Path::new(name.strip_suffix(COMPRESSED_SUFFIX).unwrap_or(name));

    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match original.extension() {
        Some(ext) => format!("{stem}{UNCOMPRESSED_MARKER}.{}", ext.to_string_lossy()),
        None => format!("{stem}{UNCOMPRESSED_MARKER}"),
    };

    original.with_file_name(file_name)
}
