//! Error types for workspace loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading files into a workspace.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The root passed to a directory load does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Reading a file failed.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the directory tree failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
