//! Local name → import spec resolution.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::directory::Directory;
use super::items::ImportSpec;
use super::unit::SourceUnit;
use crate::base::constants::DOT_IMPORT_KEY;

/// Maps an import path, as written in `from`, to the directory it names.
pub trait ImportResolver {
    fn resolve_import(&self, from: &SourceUnit, path: &str) -> Option<Arc<Directory>>;
}

/// A resolver that knows no directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl ImportResolver for Unresolved {
    fn resolve_import(&self, _from: &SourceUnit, _path: &str) -> Option<Arc<Directory>> {
        None
    }
}

/// Multi-map from the names a unit can use to refer to imported packages.
///
/// Keys keep first-insertion order; specs under one key keep import order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportMap {
    entries: IndexMap<SmolStr, Vec<ImportSpec>>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<SmolStr>, spec: ImportSpec) {
        self.entries.entry(key.into()).or_default().push(spec);
    }

    pub fn get(&self, key: &str) -> &[ImportSpec] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SmolStr> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &[ImportSpec])> + '_ {
        self.entries.iter().map(|(key, specs)| (key, specs.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SourceUnit {
    /// Build the import map of this unit.
    ///
    /// For each import, in order: an explicit alias (including `_`) is its
    /// key; a dot import goes under `"."`; otherwise every package name
    /// declared in the resolved directory is a key, and if there are none,
    /// the name guessed from the path's last segment is.
    pub fn import_map(&self, resolver: &dyn ImportResolver) -> ImportMap {
        let mut map = ImportMap::new();
        for spec in self.imports().iter() {
            if let Some(alias) = &spec.alias {
                map.put(alias.clone(), spec.clone());
                continue;
            }
            if spec.dot {
                map.put(DOT_IMPORT_KEY, spec.clone());
                continue;
            }

            let names = resolver
                .resolve_import(self, &spec.path)
                .map(|dir| dir.package_names())
                .filter(|names| !names.is_empty());
            match names {
                Some(names) => {
                    for name in names.iter().filter(|name| !name.is_empty()) {
                        map.put(name.clone(), spec.clone());
                    }
                }
                None => {
                    let name = spec.local_package_name();
                    tracing::trace!(import = %spec.path, %name, "no package names resolved, using path name");
                    if !name.is_empty() {
                        map.put(name, spec.clone());
                    }
                }
            }
        }
        map
    }
}
