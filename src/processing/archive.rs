//! Archive stage: bundle the staging directory into one in-memory ZIP.

use crate::utils::{ConverterError, ConverterResult};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a deflate-compressed ZIP of every regular file under `dir`.
///
/// Entry names are paths relative to `dir`, forward-slash separated, so the
/// extracted archive reproduces the directory layout with no absolute-path
/// segments. Enumeration follows filesystem order; entry order is not a
/// stable part of the contract. A missing or unreadable directory is an
/// error, propagated to the caller.
///
/// The returned buffer is the complete archive, readable from byte 0.
pub fn zip_directory(dir: impl AsRef<Path>) -> ConverterResult<Vec<u8>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ConverterError::Io(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| ConverterError::Io(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = relative_entry_name(entry.path(), dir)?;
        debug!("Archiving {}", name);

        writer.start_file(name, options)?;
        writer.write_all(&fs::read(entry.path())?)?;
        entries += 1;
    }

    let cursor = writer.finish()?;
    let buffer = cursor.into_inner();
    info!("Archive built: {} entries, {} bytes", entries, buffer.len());
    Ok(buffer)
}

/// ZIP entry name for `path`: its path relative to `root`, '/'-separated.
fn relative_entry_name(path: &Path, root: &Path) -> ConverterResult<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| ConverterError::Io(e.to_string()))?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
