//! Directories of source units and the package names they declare.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use smol_str::SmolStr;

use super::cache::{CacheKey, ValueCache, Versioned};
use super::unit::SourceUnit;
use crate::base::Stamp;
use crate::base::constants::{MAIN_PACKAGE_NAME, TEST_PACKAGE_SUFFIX};

static PACKAGE_NAMES: CacheKey<IndexSet<SmolStr>> = CacheKey::new("package_names");

struct DirectoryFiles {
    /// Advances on every membership change.
    stamp: Stamp,
    /// Sorted by file name.
    units: Vec<Arc<SourceUnit>>,
}

/// The units of one directory, in stable file-name order.
pub struct Directory {
    path: PathBuf,
    files: RwLock<DirectoryFiles>,
    cache: ValueCache,
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("path", &self.path)
            .field("files", &self.files.read().units.len())
            .finish()
    }
}

fn sort_key(unit: &SourceUnit) -> &Path {
    unit.path()
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            files: RwLock::new(DirectoryFiles {
                stamp: Stamp::next(),
                units: Vec::new(),
            }),
            cache: ValueCache::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a unit, replacing any unit with the same path.
    pub fn add_file(&self, unit: Arc<SourceUnit>) {
        let mut files = self.files.write();
        match files
            .units
            .binary_search_by(|probe| sort_key(probe).cmp(sort_key(&unit)))
        {
            Ok(index) => files.units[index] = unit,
            Err(index) => files.units.insert(index, unit),
        }
        files.stamp = Stamp::next();
    }

    /// Remove the unit with the given path.
    pub fn remove_file(&self, path: &Path) -> Option<Arc<SourceUnit>> {
        let mut files = self.files.write();
        let index = files.units.iter().position(|unit| unit.path() == path)?;
        files.stamp = Stamp::next();
        Some(files.units.remove(index))
    }

    /// Find a unit by file name, e.g. `"main.go"`.
    pub fn find_file(&self, name: &str) -> Option<Arc<SourceUnit>> {
        self.files
            .read()
            .units
            .iter()
            .find(|unit| unit.file_name() == Some(name))
            .cloned()
    }

    pub fn files(&self) -> Vec<Arc<SourceUnit>> {
        self.files.read().units.clone()
    }

    pub fn len(&self) -> usize {
        self.files.read().units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().units.is_empty()
    }

    /// Package names declared by the units of this directory.
    ///
    /// Units without a package clause and `main` packages are skipped; a
    /// `_test` suffix is stripped, so `util` and `util_test` both count as
    /// `util`. Names appear in file-name order of their first declaring unit.
    pub fn package_names(&self) -> Arc<IndexSet<SmolStr>> {
        self.cached(&PACKAGE_NAMES, || {
            let files = self.files();
            tracing::trace!(dir = %self.path.display(), files = files.len(), "scanning package names");
            files
                .iter()
                .filter_map(|unit| unit.package_name())
                .filter(|name| name.as_str() != MAIN_PACKAGE_NAME)
                .map(|name| match name.strip_suffix(TEST_PACKAGE_SUFFIX) {
                    Some(stripped) => SmolStr::new(stripped),
                    None => name,
                })
                .collect()
        })
    }
}

impl Versioned for Directory {
    /// The newest of the membership stamp and every member's stamp.
    fn stamp(&self) -> Stamp {
        let files = self.files.read();
        files
            .units
            .iter()
            .map(|unit| unit.stamp())
            .fold(files.stamp, Stamp::max)
    }

    fn value_cache(&self) -> &ValueCache {
        &self.cache
    }
}
