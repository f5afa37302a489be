//! In-memory file stubs.
//!
//! A [`FileStub`] is the declaration skeleton of one unit: package clause,
//! import list, and the function, method, type, var and const declarations
//! with their specs and definitions. It is derived from a finished tree and
//! never changes afterwards; new content gets a new stub.

use smol_str::SmolStr;
use text_size::TextRange;

use super::node::IndexNode;
use super::walk::transparent_children;
use crate::parser::{SyntaxKind, SyntaxNode};

/// One element of a stub tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubElement {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub name: Option<SmolStr>,
    pub detail: Option<SmolStr>,
    pub dot: bool,
    pub children: Vec<StubElement>,
}

impl StubElement {
    fn from_syntax(node: SyntaxNode) -> Self {
        let index_node = IndexNode::Syntax(node.clone());
        Self {
            kind: node.kind(),
            range: node.text_range(),
            name: index_node.name(),
            detail: index_node.detail(),
            dot: index_node.is_dot(),
            children: stubbed_children(&node),
        }
    }

    /// Direct children of the given kind.
    pub fn children_of_kind(&self, kind: SyntaxKind) -> impl Iterator<Item = &StubElement> + '_ {
        self.children.iter().filter(move |child| child.kind == kind)
    }
}

fn stubbed_children(node: &SyntaxNode) -> Vec<StubElement> {
    transparent_children(node)
        .into_iter()
        .filter(|child| child.kind().is_stubbed())
        .map(StubElement::from_syntax)
        .collect()
}

/// Declaration skeleton of a whole unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStub {
    root: StubElement,
}

impl FileStub {
    /// Project a source file tree onto its declaration skeleton.
    pub fn build(root: &SyntaxNode) -> Self {
        Self {
            root: StubElement {
                kind: root.kind(),
                range: root.text_range(),
                name: None,
                detail: None,
                dot: false,
                children: stubbed_children(root),
            },
        }
    }

    pub fn root(&self) -> &StubElement {
        &self.root
    }

    pub fn package_clause(&self) -> Option<&StubElement> {
        self.root
            .children_of_kind(SyntaxKind::PACKAGE_CLAUSE)
            .next()
    }

    pub fn package_name(&self) -> Option<SmolStr> {
        self.package_clause().and_then(|clause| clause.name.clone())
    }

    /// Elements of `kind`, looking through declaration groups.
    ///
    /// `children_of_kind(IMPORT_SPEC)` yields the specs of every import
    /// declaration; `children_of_kind(VAR_SPEC)` the specs of every var
    /// declaration, in document order.
    pub fn children_of_kind(&self, kind: SyntaxKind) -> Vec<&StubElement> {
        let mut found = Vec::new();
        collect_of_kind(&self.root, kind, &mut found);
        found
    }

    /// Top-level elements in document order.
    pub fn plain_list(&self) -> &[StubElement] {
        &self.root.children
    }
}

fn collect_of_kind<'a>(parent: &'a StubElement, kind: SyntaxKind, found: &mut Vec<&'a StubElement>) {
    for child in &parent.children {
        if child.kind == kind {
            found.push(child);
        } else if child.kind.is_declaration_group() {
            collect_of_kind(child, kind, found);
        }
    }
}
