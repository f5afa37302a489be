//! Placeholder-transparent traversal of a unit's top level.
//!
//! Error recovery wraps junk and the declaration that follows it in
//! placeholder nodes. Traversals here never yield a placeholder: its
//! children are visited as if they were children of the placeholder's
//! parent, recursively.

use super::node::IndexNode;
use super::unit::UnitContent;
use crate::parser::SyntaxNode;

/// Nodes whose children are inlined into their parent's iteration.
pub fn is_transparent(node: &SyntaxNode) -> bool {
    node.kind().is_placeholder()
}

/// Visit the children of `parent` in order, flattening transparent nodes.
///
/// Returns `false` as soon as `visitor` does, without visiting anything
/// further.
pub fn walk_syntax<F>(parent: &SyntaxNode, visitor: &mut F) -> bool
where
    F: FnMut(SyntaxNode) -> bool,
{
    for child in parent.children() {
        if is_transparent(&child) {
            if !walk_syntax(&child, visitor) {
                return false;
            }
        } else if !visitor(child) {
            return false;
        }
    }
    true
}

/// Children of `node` with transparent nodes flattened away.
pub fn transparent_children(node: &SyntaxNode) -> Vec<SyntaxNode> {
    let mut children = Vec::new();
    walk_syntax(node, &mut |child| {
        children.push(child);
        true
    });
    children
}

/// Walk the top level of a unit.
///
/// With a stub present the stub-plain-list is iterated and the tree is
/// never built. Otherwise the tree is walked with placeholders flattened.
/// For a well-formed unit both produce the same sequence of node kinds and
/// ranges.
pub fn walk<'a, F>(content: &'a UnitContent, mut visitor: F) -> bool
where
    F: FnMut(IndexNode<'a>) -> bool,
{
    match content.stub() {
        Some(stub) => stub
            .plain_list()
            .iter()
            .all(|element| visitor(IndexNode::Stub(element))),
        None => walk_syntax(&content.syntax(), &mut |node| visitor(IndexNode::Syntax(node))),
    }
}
