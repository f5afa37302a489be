//! Values returned by structural queries.
//!
//! Items are plain owned data, detached from both the stub and the tree, so
//! they can be cached and shared across threads.

use smol_str::SmolStr;
use text_size::TextRange;

use super::node::IndexNode;
use crate::parser::SyntaxKind;

/// Extraction of an item from a structural node.
pub trait IndexItem: Sized {
    /// Node kind the item is read from.
    const KIND: SyntaxKind;

    /// `None` if the node is of another kind or is missing its name.
    fn from_node(node: &IndexNode<'_>) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageClause {
    pub name: Option<SmolStr>,
    pub range: TextRange,
}

impl IndexItem for PackageClause {
    const KIND: SyntaxKind = SyntaxKind::PACKAGE_CLAUSE;

    fn from_node(node: &IndexNode<'_>) -> Option<Self> {
        (node.kind() == Self::KIND).then(|| PackageClause {
            name: node.name(),
            range: node.text_range(),
        })
    }
}

/// A single import: `import alias "path"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportSpec {
    pub path: SmolStr,
    /// Explicit local name; `_` for blank imports.
    pub alias: Option<SmolStr>,
    /// `import . "path"`
    pub dot: bool,
    pub range: TextRange,
}

impl ImportSpec {
    /// Whether this is a blank (`_`) import.
    pub fn is_blank(&self) -> bool {
        self.alias.as_deref() == Some("_")
    }

    /// Best-effort package name guessed from the import path.
    pub fn local_package_name(&self) -> SmolStr {
        local_package_name(&self.path)
    }
}

impl IndexItem for ImportSpec {
    const KIND: SyntaxKind = SyntaxKind::IMPORT_SPEC;

    fn from_node(node: &IndexNode<'_>) -> Option<Self> {
        if node.kind() != Self::KIND {
            return None;
        }
        Some(ImportSpec {
            path: node.detail().unwrap_or_default(),
            alias: node.name(),
            dot: node.is_dot(),
            range: node.text_range(),
        })
    }
}

/// Guess the package name an import path binds when nothing better is
/// known: its last segment, with characters that cannot appear in an
/// identifier replaced by `_`.
///
/// `"gopkg.in/yaml.v2"` gives `yaml_v2`; a path ending in `/` gives the
/// empty string.
pub fn local_package_name(path: &str) -> SmolStr {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_alphabetic() || c == '_' || (i > 0 && c.is_numeric()) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

macro_rules! named_item {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub name: SmolStr,
            pub range: TextRange,
        }

        impl IndexItem for $name {
            const KIND: SyntaxKind = SyntaxKind::$kind;

            fn from_node(node: &IndexNode<'_>) -> Option<Self> {
                if node.kind() != Self::KIND {
                    return None;
                }
                Some($name {
                    name: node.name()?,
                    range: node.text_range(),
                })
            }
        }
    };
}

named_item!(
    /// A top-level `func` without receiver.
    FunctionDecl,
    FUNCTION_DECLARATION
);
named_item!(TypeSpec, TYPE_SPEC);
named_item!(VarDefinition, VAR_DEFINITION);
named_item!(ConstDefinition, CONST_DEFINITION);

/// A `func` with a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDecl {
    pub name: SmolStr,
    /// Base type of the receiver, pointer and type arguments stripped.
    pub receiver_type: Option<SmolStr>,
    pub range: TextRange,
}

impl IndexItem for MethodDecl {
    const KIND: SyntaxKind = SyntaxKind::METHOD_DECLARATION;

    fn from_node(node: &IndexNode<'_>) -> Option<Self> {
        if node.kind() != Self::KIND {
            return None;
        }
        Some(MethodDecl {
            name: node.name()?,
            receiver_type: node.detail(),
            range: node.text_range(),
        })
    }
}

/// Convert nodes to items, dropping the ones that do not qualify.
pub(crate) fn items<'a, T: IndexItem>(nodes: impl IntoIterator<Item = IndexNode<'a>>) -> Vec<T> {
    nodes
        .into_iter()
        .filter_map(|node| T::from_node(&node))
        .collect()
}
