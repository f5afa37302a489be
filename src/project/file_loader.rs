//! Discovery and reading of Go source files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::LoadError;
use crate::base::constants::GO_EXTENSION;

/// Get the file extension, if any.
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

pub fn is_go_file(path: &Path) -> bool {
    get_extension(path) == Some(GO_EXTENSION)
}

/// All `.go` files under `dir`, recursively, in sorted path order.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_go_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Read one file as UTF-8 text.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}
