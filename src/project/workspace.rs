//! In-memory workspace of directories and source units.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use parking_lot::RwLock;
use rayon::prelude::*;

use super::config::WorkspaceConfig;
use crate::base::FileId;
use crate::index::{Directory, ImportResolver, SourceUnit};

/// A set of directories keyed by path, each holding its source units.
///
/// Also the default [`ImportResolver`]: relative import paths resolve
/// against the importing file's directory, all others against the
/// configured source roots.
#[derive(Debug, Default)]
pub struct Workspace {
    config: WorkspaceConfig,
    directories: RwLock<IndexMap<PathBuf, Arc<Directory>>>,
    next_file_id: AtomicU32,
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl Workspace {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    fn allocate_id(&self) -> FileId {
        FileId::new(self.next_file_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a unit for `path`, or replace the text of the existing one.
    pub fn set_file(&self, path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Arc<SourceUnit> {
        let path = normalize(&path.into());
        let dir_path = parent_dir(&path);
        let directory = {
            let mut directories = self.directories.write();
            directories
                .entry(dir_path.clone())
                .or_insert_with(|| Arc::new(Directory::new(dir_path)))
                .clone()
        };

        if let Some(existing) = directory.files().into_iter().find(|unit| unit.path() == path) {
            existing.set_text(text);
            return existing;
        }

        let unit = Arc::new(SourceUnit::new(self.allocate_id(), path, text));
        tracing::trace!(path = %unit.path().display(), id = unit.id().index(), "file added");
        directory.add_file(unit.clone());
        unit
    }

    /// Remove the unit at `path`. Directories left empty are dropped.
    pub fn remove_file(&self, path: &Path) -> Option<Arc<SourceUnit>> {
        let path = normalize(path);
        let dir_path = parent_dir(&path);
        let mut directories = self.directories.write();
        let directory = directories.get(&dir_path)?.clone();
        let removed = directory.remove_file(&path)?;
        if directory.is_empty() {
            directories.shift_remove(&dir_path);
        }
        Some(removed)
    }

    pub fn file(&self, path: &Path) -> Option<Arc<SourceUnit>> {
        let path = normalize(path);
        self.directory(&parent_dir(&path))?
            .files()
            .into_iter()
            .find(|unit| unit.path() == path)
    }

    pub fn directory(&self, path: &Path) -> Option<Arc<Directory>> {
        self.directories.read().get(&normalize(path)).cloned()
    }

    /// Directories in creation order.
    pub fn directories(&self) -> Vec<Arc<Directory>> {
        self.directories.read().values().cloned().collect()
    }

    pub fn files(&self) -> Vec<Arc<SourceUnit>> {
        self.directories()
            .iter()
            .flat_map(|dir| dir.files())
            .collect()
    }

    /// Commit stubs for every unit in parallel. Returns how many were installed.
    pub fn commit_stubs(&self) -> usize {
        let files = self.files();
        let committed = files.par_iter().filter(|unit| unit.commit_stub()).count();
        tracing::debug!(files = files.len(), committed, "committed stubs");
        committed
    }

    /// Import path of the package `unit` belongs to.
    ///
    /// Under a source root this is the directory of the root-relative path
    /// (absent for files directly in the root). Elsewhere it is whatever
    /// follows the last `/src/` of the file's directory.
    pub fn full_package_name(&self, unit: &SourceUnit) -> Option<String> {
        let path = unit.path();
        let root = self
            .config
            .source_roots
            .iter()
            .find(|root| path.starts_with(root));
        match root {
            Some(root) => {
                let relative = slash_path(path.strip_prefix(root).ok()?);
                let (dir, _) = relative.rsplit_once('/')?;
                Some(dir.to_string())
            }
            None => {
                let dir = slash_path(&parent_dir(path));
                let start = dir.rfind("/src/")?;
                let package = &dir[start + "/src/".len()..];
                (!package.is_empty()).then(|| package.to_string())
            }
        }
    }
}

impl ImportResolver for Workspace {
    fn resolve_import(&self, from: &SourceUnit, path: &str) -> Option<Arc<Directory>> {
        if path.starts_with("./") || path.starts_with("../") {
            return self.directory(&parent_dir(from.path()).join(path));
        }
        self.config
            .source_roots
            .iter()
            .find_map(|root| self.directory(&root.join(path)))
    }
}
