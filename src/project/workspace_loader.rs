use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use super::error::LoadError;
use super::file_loader;
use super::workspace::Workspace;
use crate::index::SourceUnit;

impl Workspace {
    /// Loads all Go files under `root` into the workspace.
    ///
    /// Files are read in parallel and registered in sorted path order. If
    /// the configuration asks for it, stubs are committed for every loaded
    /// file. Returns the loaded units.
    pub fn load_directory(&self, root: impl AsRef<Path>) -> Result<Vec<Arc<SourceUnit>>, LoadError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(LoadError::DirectoryNotFound(root.to_path_buf()));
        }

        let paths = file_loader::collect_file_paths(root)?;
        let contents = paths
            .par_iter()
            .map(|path| file_loader::load_file(path).map(|text| (path, text)))
            .collect::<Result<Vec<_>, _>>()?;

        let units: Vec<_> = contents
            .into_iter()
            .map(|(path, text)| self.set_file(path.clone(), text))
            .collect();

        if self.config().build_stubs {
            units.par_iter().for_each(|unit| {
                unit.commit_stub();
            });
        }

        tracing::info!(
            root = %root.display(),
            files = units.len(),
            stubs = self.config().build_stubs,
            "loaded directory"
        );
        Ok(units)
    }

    /// Loads a single file into the workspace.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Arc<SourceUnit>, LoadError> {
        let path = path.as_ref();
        let text = file_loader::load_file(path)?;
        Ok(self.set_file(path, text))
    }
}
