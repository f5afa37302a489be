//! Helpers for building source units in a chosen representation.

use goindex::index::FileStub;
use goindex::parser::{GreenNode, SyntaxKind, SyntaxNode, parse};
use goindex::{FileId, SourceUnit};
use rowan::NodeOrToken;

/// Which representation a unit answers queries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr {
    Stub,
    Tree,
}

/// A unit over `source`, with a committed stub for [`Repr::Stub`].
pub fn unit(repr: Repr, source: &str) -> SourceUnit {
    let unit = SourceUnit::new(FileId::new(0), "test.go", source);
    if repr == Repr::Stub {
        assert!(unit.commit_stub());
    }
    unit
}

/// A unit carrying a stub whose tree has never been built.
pub fn stub_only(source: &str) -> SourceUnit {
    let unit = SourceUnit::new(FileId::new(0), "test.go", source);
    unit.set_stub(FileStub::build(&parse(source).syntax()));
    assert!(!unit.is_tree_loaded());
    unit
}

/// A unit whose tree is `green`.
pub fn unit_from_tree(green: GreenNode) -> SourceUnit {
    SourceUnit::from_tree(FileId::new(0), "test.go", green)
}

/// Wrap the `nth` node of `kind` (in preorder) in a placeholder node.
pub fn wrap_nth(root: &SyntaxNode, kind: SyntaxKind, nth: usize) -> GreenNode {
    let target = root
        .descendants()
        .filter(|node| node.kind() == kind)
        .nth(nth)
        .unwrap_or_else(|| panic!("no {kind:?} #{nth} in tree"));
    let wrapped = GreenNode::new(
        SyntaxKind::DUMMY_BLOCK.into(),
        [NodeOrToken::Node(target.green().into_owned())],
    );
    target.replace_with(wrapped)
}

/// Wrap every node of `kind` in its own placeholder node.
pub fn wrap_all(green: GreenNode, kind: SyntaxKind) -> GreenNode {
    let count = SyntaxNode::new_root(green.clone())
        .descendants()
        .filter(|node| node.kind() == kind)
        .count();
    (0..count).fold(green, |green, nth| {
        wrap_nth(&SyntaxNode::new_root(green), kind, nth)
    })
}

/// Wrap top-level child nodes `start..end` of `root` in one placeholder.
pub fn wrap_top_level(root: &SyntaxNode, start: usize, end: usize) -> GreenNode {
    let children: Vec<_> = root.green().children().map(|child| child.to_owned()).collect();
    let node_positions: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| matches!(child, NodeOrToken::Node(_)))
        .map(|(index, _)| index)
        .collect();
    let first = node_positions[start];
    let last = node_positions[end - 1] + 1;
    let dummy = GreenNode::new(
        SyntaxKind::DUMMY_BLOCK.into(),
        children[first..last].iter().cloned(),
    );
    let mut rebuilt = children[..first].to_vec();
    rebuilt.push(NodeOrToken::Node(dummy));
    rebuilt.extend(children[last..].iter().cloned());
    GreenNode::new(root.kind().into(), rebuilt)
}

/// Names of a query result, for compact assertions.
pub fn names<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>, name: impl Fn(&T) -> &str) -> Vec<String> {
    items.into_iter().map(|item| name(item).to_string()).collect()
}
