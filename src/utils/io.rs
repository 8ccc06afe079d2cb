//! IO Utilities for policy tree access

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

/// Reads the entire contents of a file into a byte vector.
#[instrument]
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Checks if a path is a regular readable file.
pub fn is_readable_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Lists the immediate, non-hidden subdirectories of `dir`, sorted by name.
#[instrument]
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}
