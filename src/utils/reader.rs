//! Smart file reader with automatic decompression support.
//!
//! Identity-platform exports are often downloaded or archived compressed.
//! This module opens `.gz` and `.zst` files transparently so the loader
//! never has to care about the on-disk encoding.
//!
//! # Supported Formats
//!
//! - Plain files
//! - Gzip compressed files (`.gz`)
//! - Zstandard compressed files (`.zst`)

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Returns true when the path carries a compressed-file extension.
///
/// Used by the loader to decide whether byte-based progress tracking is
/// meaningful (decompressed offsets do not match the on-disk size).
pub fn is_compressed(path: impl AsRef<Path>) -> bool {
    matches!(extension_of(path.as_ref()).as_deref(), Some("gz") | Some("zst"))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Opens a file, decompressing on the fly based on its extension.
///
/// # Examples
///
/// ```no_run
/// use authlog_tools::utils::reader::open_file;
/// use std::io::Read;
///
/// let mut reader = open_file("signin_logs.csv.zst").unwrap();
/// let mut contents = String::new();
/// reader.read_to_string(&mut contents).unwrap();
/// ```
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    match extension_of(path).as_deref() {
        Some("gz") => Ok(Box::new(GzDecoder::new(file))),
        Some("zst") => {
            let decoder = zstd::Decoder::new(file).with_context(|| {
                format!("Failed to create zstd decoder for: {}", path.display())
            })?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}
