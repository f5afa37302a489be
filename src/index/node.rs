//! A structural node backed by either a stub element or a syntax node.

use smol_str::SmolStr;
use text_size::TextRange;

use super::stub::StubElement;
use super::walk::transparent_children;
use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode};

/// One node of the structural skeleton of a unit.
///
/// Queries read names and details through this type so that the stub path
/// and the tree path share a single extraction routine.
#[derive(Debug, Clone)]
pub enum IndexNode<'a> {
    Stub(&'a StubElement),
    Syntax(SyntaxNode),
}

impl<'a> IndexNode<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            IndexNode::Stub(element) => element.kind,
            IndexNode::Syntax(node) => node.kind(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        match self {
            IndexNode::Stub(element) => element.range,
            IndexNode::Syntax(node) => node.text_range(),
        }
    }

    /// Declared name: the first identifier of the node. For an import spec
    /// this is its alias.
    pub fn name(&self) -> Option<SmolStr> {
        match self {
            IndexNode::Stub(element) => element.name.clone(),
            IndexNode::Syntax(node) => {
                ast::ident_child(node).map(|token| SmolStr::new(token.text().trim()))
            }
        }
    }

    /// Kind-specific extra text: the path of an import spec, the receiver
    /// type of a method.
    pub fn detail(&self) -> Option<SmolStr> {
        match self {
            IndexNode::Stub(element) => element.detail.clone(),
            IndexNode::Syntax(node) => syntax_detail(node),
        }
    }

    pub fn is_dot(&self) -> bool {
        match self {
            IndexNode::Stub(element) => element.dot,
            IndexNode::Syntax(node) => ast::ImportSpec::cast(node.clone())
                .map(|spec| spec.is_dot())
                .unwrap_or(false),
        }
    }

    /// Children with placeholder nodes flattened away.
    pub fn children(&self) -> Vec<IndexNode<'a>> {
        match self {
            IndexNode::Stub(element) => element.children.iter().map(IndexNode::Stub).collect(),
            IndexNode::Syntax(node) => transparent_children(node)
                .into_iter()
                .map(IndexNode::Syntax)
                .collect(),
        }
    }

    pub fn children_of_kind(&self, kind: SyntaxKind) -> Vec<IndexNode<'a>> {
        self.children()
            .into_iter()
            .filter(|child| child.kind() == kind)
            .collect()
    }

    pub fn as_syntax(&self) -> Option<&SyntaxNode> {
        match self {
            IndexNode::Syntax(node) => Some(node),
            IndexNode::Stub(_) => None,
        }
    }
}

pub(crate) fn syntax_detail(node: &SyntaxNode) -> Option<SmolStr> {
    match node.kind() {
        SyntaxKind::IMPORT_SPEC => ast::ImportSpec::cast(node.clone())
            .and_then(|spec| spec.path())
            .map(SmolStr::from),
        SyntaxKind::METHOD_DECLARATION => {
            ast::MethodDeclaration::cast(node.clone()).and_then(|method| method.receiver_type())
        }
        _ => None,
    }
}
