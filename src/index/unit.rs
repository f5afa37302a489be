//! Source units and their content snapshots.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::cache::{ValueCache, Versioned};
use super::node::IndexNode;
use super::stub::FileStub;
use super::walk;
use crate::base::{FileId, Stamp};
use crate::parser::{GreenNode, Parse, SyntaxNode, parse};

/// Immutable snapshot of a unit's content.
///
/// Holds the text, the stub (if one was committed for this content) and the
/// tree, which is parsed on first use. A snapshot never changes once the
/// tree is built; editing a unit installs a new snapshot.
pub struct UnitContent {
    stamp: Stamp,
    text: Arc<str>,
    stub: Option<Arc<FileStub>>,
    tree: OnceLock<Parse>,
}

impl fmt::Debug for UnitContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitContent")
            .field("stamp", &self.stamp)
            .field("len", &self.text.len())
            .field("stub", &self.stub.is_some())
            .field("tree", &self.is_tree_loaded())
            .finish()
    }
}

impl UnitContent {
    fn from_text(text: Arc<str>) -> Self {
        Self {
            stamp: Stamp::next(),
            text,
            stub: None,
            tree: OnceLock::new(),
        }
    }

    fn from_green(green: GreenNode) -> Self {
        let text: Arc<str> = SyntaxNode::new_root(green.clone()).text().to_string().into();
        let tree = OnceLock::new();
        let _ = tree.set(Parse::new(green, Vec::new()));
        Self {
            stamp: Stamp::next(),
            text,
            stub: None,
            tree,
        }
    }

    fn with_stub(&self, stub: Arc<FileStub>) -> Self {
        let tree = OnceLock::new();
        if let Some(parse) = self.tree.get() {
            let _ = tree.set(parse.clone());
        }
        Self {
            stamp: self.stamp,
            text: self.text.clone(),
            stub: Some(stub),
            tree,
        }
    }

    pub fn stamp(&self) -> Stamp {
        self.stamp
    }

    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn stub(&self) -> Option<&FileStub> {
        self.stub.as_deref()
    }

    /// The parse of this content, built on first call.
    pub fn parse(&self) -> &Parse {
        self.tree.get_or_init(|| {
            let parse = parse(&self.text);
            tracing::debug!(
                stamp = self.stamp.get(),
                errors = parse.errors.len(),
                "built syntax tree"
            );
            parse
        })
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.parse().syntax()
    }

    pub fn is_tree_loaded(&self) -> bool {
        self.tree.get().is_some()
    }
}

/// One Go source file.
///
/// Content is replaced as a whole; each replacement advances the stamp and
/// invalidates every value cached for the unit.
pub struct SourceUnit {
    id: FileId,
    path: PathBuf,
    content: RwLock<Arc<UnitContent>>,
    pub(super) cache: ValueCache,
}

impl fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceUnit")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("content", &*self.content.read())
            .finish()
    }
}

impl SourceUnit {
    pub fn new(id: FileId, path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        Self::with_content(id, path.into(), UnitContent::from_text(text.into()))
    }

    /// A unit whose tree was built elsewhere. The text is the tree's text.
    pub fn from_tree(id: FileId, path: impl Into<PathBuf>, green: GreenNode) -> Self {
        Self::with_content(id, path.into(), UnitContent::from_green(green))
    }

    fn with_content(id: FileId, path: PathBuf, content: UnitContent) -> Self {
        Self {
            id,
            path,
            content: RwLock::new(Arc::new(content)),
            cache: ValueCache::new(),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, e.g. `main.go`.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// The current content. Queries on one snapshot are mutually consistent
    /// even if the unit is edited concurrently.
    pub fn snapshot(&self) -> Arc<UnitContent> {
        self.content.read().clone()
    }

    pub fn text(&self) -> Arc<str> {
        self.snapshot().text.clone()
    }

    pub fn stub(&self) -> Option<Arc<FileStub>> {
        self.snapshot().stub.clone()
    }

    /// Replace the content. Drops stub and tree.
    pub fn set_text(&self, text: impl Into<Arc<str>>) {
        let text = text.into();
        // Stamp allocated under the lock; `Directory::stamp` relies on it.
        let mut slot = self.content.write();
        let content = UnitContent::from_text(text);
        tracing::trace!(path = %self.path.display(), stamp = content.stamp.get(), "unit text replaced");
        *slot = Arc::new(content);
    }

    /// Replace the content with an externally built tree. Drops the stub.
    pub fn set_tree(&self, green: GreenNode) {
        let mut slot = self.content.write();
        let content = UnitContent::from_green(green);
        tracing::trace!(path = %self.path.display(), stamp = content.stamp.get(), "unit tree replaced");
        *slot = Arc::new(content);
    }

    /// Attach a stub derived from the current content.
    ///
    /// The stamp does not move: the stub describes the same content the tree
    /// does, so cached answers stay valid.
    pub fn set_stub(&self, stub: FileStub) {
        let mut content = self.content.write();
        let updated = content.with_stub(Arc::new(stub));
        *content = Arc::new(updated);
    }

    /// Build a stub from the current tree and install it.
    ///
    /// Does nothing if the content was replaced while the stub was being
    /// built. Returns whether a stub was installed.
    pub fn commit_stub(&self) -> bool {
        let snapshot = self.snapshot();
        let stub = Arc::new(FileStub::build(&snapshot.syntax()));
        let mut content = self.content.write();
        if content.stamp != snapshot.stamp {
            tracing::debug!(path = %self.path.display(), "content changed during stub commit");
            return false;
        }
        let updated = content.with_stub(stub);
        *content = Arc::new(updated);
        tracing::trace!(path = %self.path.display(), stamp = snapshot.stamp.get(), "stub committed");
        true
    }

    /// The tree of the current content, parsed on demand.
    pub fn syntax(&self) -> SyntaxNode {
        self.snapshot().syntax()
    }

    pub fn is_tree_loaded(&self) -> bool {
        self.content.read().is_tree_loaded()
    }

    /// Walk the top level, from the stub if present. See [`walk::walk`].
    pub fn walk<F>(&self, visitor: F) -> bool
    where
        F: for<'a> FnMut(IndexNode<'a>) -> bool,
    {
        let snapshot = self.snapshot();
        walk::walk(&snapshot, visitor)
    }

    pub(super) fn replace_content(&self, f: impl FnOnce(&UnitContent) -> Option<GreenNode>) -> bool {
        let mut content = self.content.write();
        match f(&**content) {
            Some(green) => {
                let updated = UnitContent::from_green(green);
                tracing::trace!(path = %self.path.display(), stamp = updated.stamp.get(), "unit tree edited");
                *content = Arc::new(updated);
                true
            }
            None => false,
        }
    }
}

impl Versioned for SourceUnit {
    fn stamp(&self) -> Stamp {
        self.content.read().stamp
    }

    fn value_cache(&self) -> &ValueCache {
        &self.cache
    }
}
