//! Structural queries over a source unit.
//!
//! Every query picks its representation once: a committed stub answers
//! directly, otherwise the tree is walked and the result memoized against
//! the unit's stamp. Both representations produce the same items in the
//! same order.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::cache::CacheKey;
use super::items::{
    ConstDefinition, FunctionDecl, ImportSpec, IndexItem, MethodDecl, PackageClause, TypeSpec,
    VarDefinition, items,
};
use super::node::IndexNode;
use super::stub::FileStub;
use super::unit::{SourceUnit, UnitContent};
use super::walk::{self, walk_syntax};
use crate::base::constants::MAIN_FUNCTION_NAME;
use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, edit};

/// The representation a query is answered from.
#[derive(Debug, Clone, Copy)]
pub enum SourceIndex<'a> {
    Stub(&'a FileStub),
    Tree(&'a UnitContent),
}

impl<'a> SourceIndex<'a> {
    pub fn of(content: &'a UnitContent) -> Self {
        match content.stub() {
            Some(stub) => SourceIndex::Stub(stub),
            None => SourceIndex::Tree(content),
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, SourceIndex::Stub(_))
    }

    /// Top-level nodes of `kind`, placeholders flattened.
    fn top_level(content: &'a UnitContent, kind: SyntaxKind) -> Vec<IndexNode<'a>> {
        let mut found = Vec::new();
        walk::walk(content, |node| {
            if node.kind() == kind {
                found.push(node);
            }
            true
        });
        found
    }

    /// Stub elements of `kind`, looking through declaration groups.
    fn from_stub(stub: &'a FileStub, kind: SyntaxKind) -> Vec<IndexNode<'a>> {
        stub.children_of_kind(kind)
            .into_iter()
            .map(IndexNode::Stub)
            .collect()
    }

    pub fn package_clause(&self) -> Option<PackageClause> {
        match *self {
            SourceIndex::Stub(stub) => stub
                .package_clause()
                .and_then(|clause| PackageClause::from_node(&IndexNode::Stub(clause))),
            SourceIndex::Tree(content) => {
                let mut clause = None;
                walk::walk(content, |node| {
                    if node.kind() == SyntaxKind::PACKAGE_CLAUSE {
                        clause = PackageClause::from_node(&node);
                        return false;
                    }
                    true
                });
                clause
            }
        }
    }

    pub fn package_name(&self) -> Option<SmolStr> {
        match *self {
            SourceIndex::Stub(stub) => stub.package_name(),
            SourceIndex::Tree(_) => self.package_clause().and_then(|clause| clause.name),
        }
    }

    pub fn functions(&self) -> Vec<FunctionDecl> {
        self.declarations()
    }

    pub fn methods(&self) -> Vec<MethodDecl> {
        self.declarations()
    }

    fn declarations<T: IndexItem>(&self) -> Vec<T> {
        match *self {
            SourceIndex::Stub(stub) => items(Self::from_stub(stub, T::KIND)),
            SourceIndex::Tree(content) => items(Self::top_level(content, T::KIND)),
        }
    }

    pub fn types(&self) -> Vec<TypeSpec> {
        match *self {
            SourceIndex::Stub(stub) => items(Self::from_stub(stub, SyntaxKind::TYPE_SPEC)),
            SourceIndex::Tree(content) => items(
                Self::top_level(content, SyntaxKind::TYPE_DECLARATION)
                    .iter()
                    .flat_map(|decl| decl.children_of_kind(SyntaxKind::TYPE_SPEC)),
            ),
        }
    }

    pub fn vars(&self) -> Vec<VarDefinition> {
        self.definitions(
            SyntaxKind::VAR_DECLARATION,
            SyntaxKind::VAR_SPEC,
            SyntaxKind::VAR_DEFINITION,
        )
    }

    pub fn constants(&self) -> Vec<ConstDefinition> {
        self.definitions(
            SyntaxKind::CONST_DECLARATION,
            SyntaxKind::CONST_SPEC,
            SyntaxKind::CONST_DEFINITION,
        )
    }

    /// Leaf definitions of var or const declarations: declaration order,
    /// then spec order, then definition order.
    fn definitions<T: IndexItem>(
        &self,
        declaration: SyntaxKind,
        spec: SyntaxKind,
        definition: SyntaxKind,
    ) -> Vec<T> {
        let specs = match *self {
            SourceIndex::Stub(stub) => Self::from_stub(stub, spec),
            SourceIndex::Tree(content) => Self::top_level(content, declaration)
                .iter()
                .flat_map(|decl| decl.children_of_kind(spec))
                .collect(),
        };
        items(specs.iter().flat_map(|spec| spec.children_of_kind(definition)))
    }

    pub fn imports(&self) -> Vec<ImportSpec> {
        match *self {
            SourceIndex::Stub(stub) => items(Self::from_stub(stub, SyntaxKind::IMPORT_SPEC)),
            SourceIndex::Tree(content) => {
                let Some(list) = Self::top_level(content, SyntaxKind::IMPORT_LIST)
                    .into_iter()
                    .next()
                else {
                    return Vec::new();
                };
                items(
                    list.children_of_kind(SyntaxKind::IMPORT_DECLARATION)
                        .iter()
                        .flat_map(|decl| decl.children_of_kind(SyntaxKind::IMPORT_SPEC)),
                )
            }
        }
    }
}

static FUNCTIONS: CacheKey<Vec<FunctionDecl>> = CacheKey::new("functions");
static METHODS: CacheKey<Vec<MethodDecl>> = CacheKey::new("methods");
static TYPES: CacheKey<Vec<TypeSpec>> = CacheKey::new("types");
static VARS: CacheKey<Vec<VarDefinition>> = CacheKey::new("vars");
static CONSTANTS: CacheKey<Vec<ConstDefinition>> = CacheKey::new("constants");
static IMPORTS: CacheKey<Vec<ImportSpec>> = CacheKey::new("imports");
static PACKAGE_CLAUSE: CacheKey<Option<PackageClause>> = CacheKey::new("package_clause");
static IMPORTED_PACKAGES: CacheKey<IndexMap<SmolStr, ImportSpec>> =
    CacheKey::new("imported_packages");

impl SourceUnit {
    /// Answer from the stub if present, otherwise from the tree memoized
    /// against the snapshot's stamp.
    fn query<T, F>(&self, key: &CacheKey<T>, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce(SourceIndex<'_>) -> T,
    {
        self.query_snapshot(&self.snapshot(), key, compute)
    }

    fn query_snapshot<T, F>(&self, snapshot: &UnitContent, key: &CacheKey<T>, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce(SourceIndex<'_>) -> T,
    {
        let index = SourceIndex::of(snapshot);
        if index.is_stub() {
            return Arc::new(compute(index));
        }
        self.cache
            .get_or_compute(snapshot.stamp(), key, || compute(index))
    }

    pub fn package_clause(&self) -> Option<PackageClause> {
        (*self.query(&PACKAGE_CLAUSE, |index| index.package_clause())).clone()
    }

    /// Declared package name, trimmed. `None` without a package clause.
    pub fn package_name(&self) -> Option<SmolStr> {
        let snapshot = self.snapshot();
        match SourceIndex::of(&snapshot) {
            SourceIndex::Stub(stub) => stub.package_name(),
            SourceIndex::Tree(_) => self
                .query_snapshot(&snapshot, &PACKAGE_CLAUSE, |index| index.package_clause())
                .as_ref()
                .clone()
                .and_then(|clause| clause.name),
        }
    }

    pub fn functions(&self) -> Arc<Vec<FunctionDecl>> {
        self.query(&FUNCTIONS, |index| index.functions())
    }

    pub fn methods(&self) -> Arc<Vec<MethodDecl>> {
        self.query(&METHODS, |index| index.methods())
    }

    pub fn types(&self) -> Arc<Vec<TypeSpec>> {
        self.query(&TYPES, |index| index.types())
    }

    pub fn vars(&self) -> Arc<Vec<VarDefinition>> {
        self.query(&VARS, |index| index.vars())
    }

    pub fn constants(&self) -> Arc<Vec<ConstDefinition>> {
        self.query(&CONSTANTS, |index| index.constants())
    }

    pub fn imports(&self) -> Arc<Vec<ImportSpec>> {
        self.query(&IMPORTS, |index| index.imports())
    }

    /// Import specs keyed by import path. On duplicate paths the later
    /// spec wins.
    pub fn imported_packages_map(&self) -> Arc<IndexMap<SmolStr, ImportSpec>> {
        let snapshot = self.snapshot();
        self.cache
            .get_or_compute(snapshot.stamp(), &IMPORTED_PACKAGES, || {
                SourceIndex::of(&snapshot)
                    .imports()
                    .into_iter()
                    .map(|spec| (spec.path.clone(), spec))
                    .collect()
            })
    }

    /// The first function named `main`.
    pub fn find_main_function(&self) -> Option<FunctionDecl> {
        self.functions()
            .iter()
            .find(|function| function.name == MAIN_FUNCTION_NAME)
            .cloned()
    }

    /// The import list node of the tree, placeholders looked through.
    pub fn import_list(&self) -> Option<ast::ImportList> {
        find_import_list(&self.snapshot())
    }

    /// Append `import alias "path"` to the import list.
    ///
    /// The unit gets new content and a new stamp. Returns the added spec,
    /// or `None` if the unit has no import list to attach to or `alias` is
    /// neither `.` nor an identifier.
    pub fn add_import(&self, path: &str, alias: Option<&str>) -> Option<ImportSpec> {
        let added = self.replace_content(|content| {
            let list = find_import_list(content)?;
            edit::insert_import(&list, path, alias)
        });
        if !added {
            tracing::debug!(path = %self.path().display(), import = path, "import not added");
            return None;
        }
        self.imports()
            .iter()
            .rev()
            .find(|spec| spec.path == path)
            .cloned()
    }
}

fn find_import_list(content: &UnitContent) -> Option<ast::ImportList> {
    let mut list = None;
    walk_syntax(&content.syntax(), &mut |node| {
        list = ast::ImportList::cast(node);
        list.is_none()
    });
    list
}
