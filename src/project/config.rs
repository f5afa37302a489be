//! Workspace configuration.

use std::env;
use std::path::PathBuf;

use crate::base::constants::{GOPATH_ENV, GOROOT_ENV, SRC_DIR};

/// Settings that shape how a [`super::Workspace`] loads and resolves files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Directories that import paths are resolved against, in priority order.
    pub source_roots: Vec<PathBuf>,
    /// Commit stubs for every file after a directory load.
    pub build_stubs: bool,
}

impl WorkspaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_roots.push(root.into());
        self
    }

    pub fn with_stubs(mut self, build_stubs: bool) -> Self {
        self.build_stubs = build_stubs;
        self
    }

    /// Source roots from the Go environment: `<entry>/src` for every
    /// `GOPATH` entry, then `$GOROOT/src`.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(gopath) = env::var_os(GOPATH_ENV) {
            for entry in env::split_paths(&gopath) {
                if !entry.as_os_str().is_empty() {
                    config.source_roots.push(entry.join(SRC_DIR));
                }
            }
        }
        if let Some(goroot) = env::var_os(GOROOT_ENV).filter(|v| !v.is_empty()) {
            config.source_roots.push(PathBuf::from(goroot).join(SRC_DIR));
        }
        tracing::debug!(roots = config.source_roots.len(), "source roots from environment");
        config
    }
}
