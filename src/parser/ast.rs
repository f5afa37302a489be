//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Go syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Accessors here look at direct children only; placeholder flattening
//! is the job of the index layer.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Declarations and specs that are named by their first direct identifier.
macro_rules! named {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn name_token(&self) -> Option<SyntaxToken> {
                    ident_child(&self.0)
                }

                pub fn name(&self) -> Option<SmolStr> {
                    self.name_token().map(|t| SmolStr::new(t.text().trim()))
                }
            }
        )*
    };
}

/// First identifier token among the direct children of `node`.
pub fn ident_child(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|t| t.kind() == SyntaxKind::IDENT)
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|el| el.into_token())
        .any(|t| t.kind() == kind)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn package_clause(&self) -> Option<PackageClause> {
        self.0.children().find_map(PackageClause::cast)
    }

    pub fn import_list(&self) -> Option<ImportList> {
        self.0.children().find_map(ImportList::cast)
    }
}

ast_node!(PackageClause, PACKAGE_CLAUSE);

// ============================================================================
// Imports
// ============================================================================

ast_node!(ImportList, IMPORT_LIST);

impl ImportList {
    pub fn declarations(&self) -> impl Iterator<Item = ImportDeclaration> + '_ {
        self.0.children().filter_map(ImportDeclaration::cast)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations().next().is_none()
    }
}

ast_node!(ImportDeclaration, IMPORT_DECLARATION);

impl ImportDeclaration {
    pub fn specs(&self) -> impl Iterator<Item = ImportSpec> + '_ {
        self.0.children().filter_map(ImportSpec::cast)
    }
}

ast_node!(ImportSpec, IMPORT_SPEC);

impl ImportSpec {
    /// Explicit local name, including the blank identifier `_`.
    pub fn alias(&self) -> Option<SmolStr> {
        ident_child(&self.0).map(|t| SmolStr::new(t.text()))
    }

    /// `import . "path"`
    pub fn is_dot(&self) -> bool {
        has_token(&self.0, SyntaxKind::DOT)
    }

    pub fn import_string(&self) -> Option<ImportString> {
        self.0.children().find_map(ImportString::cast)
    }

    pub fn path(&self) -> Option<String> {
        self.import_string().map(|s| s.path())
    }
}

ast_node!(ImportString, IMPORT_STRING);

impl ImportString {
    pub fn literal(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|el| el.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::STRING | SyntaxKind::RAW_STRING))
    }

    /// The unquoted import path.
    pub fn path(&self) -> String {
        self.literal()
            .map(|t| unquote(t.text()))
            .unwrap_or_default()
    }
}

/// Strip string delimiters and resolve simple escapes.
pub fn unquote(literal: &str) -> String {
    if let Some(raw) = literal
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
    {
        return raw.to_string();
    }
    let inner = literal
        .strip_prefix('"')
        .map(|s| s.strip_suffix('"').unwrap_or(s))
        .unwrap_or(literal);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Functions and methods
// ============================================================================

ast_node!(FunctionDeclaration, FUNCTION_DECLARATION);
ast_node!(MethodDeclaration, METHOD_DECLARATION);

impl MethodDeclaration {
    pub fn receiver(&self) -> Option<Receiver> {
        self.0.children().find_map(Receiver::cast)
    }

    pub fn receiver_type(&self) -> Option<SmolStr> {
        self.receiver().and_then(|r| r.type_name())
    }
}

ast_node!(Receiver, RECEIVER);

impl Receiver {
    /// Base type name of the receiver: `Server` for `(s *Server)` or `(List[T])`.
    pub fn type_name(&self) -> Option<SmolStr> {
        let mut depth = 0usize;
        let mut last = None;
        for token in self
            .0
            .descendants_with_tokens()
            .filter_map(|el| el.into_token())
        {
            match token.kind() {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACK => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACK => depth = depth.saturating_sub(1),
                SyntaxKind::IDENT if depth == 1 => last = Some(SmolStr::new(token.text())),
                _ => {}
            }
        }
        last
    }
}

// ============================================================================
// Types, variables, constants
// ============================================================================

ast_node!(TypeDeclaration, TYPE_DECLARATION);
ast_node!(TypeSpec, TYPE_SPEC);

impl TypeDeclaration {
    pub fn specs(&self) -> impl Iterator<Item = TypeSpec> + '_ {
        self.0.children().filter_map(TypeSpec::cast)
    }
}

ast_node!(VarDeclaration, VAR_DECLARATION);
ast_node!(VarSpec, VAR_SPEC);
ast_node!(VarDefinition, VAR_DEFINITION);

impl VarDeclaration {
    pub fn specs(&self) -> impl Iterator<Item = VarSpec> + '_ {
        self.0.children().filter_map(VarSpec::cast)
    }
}

impl VarSpec {
    pub fn definitions(&self) -> impl Iterator<Item = VarDefinition> + '_ {
        self.0.children().filter_map(VarDefinition::cast)
    }
}

ast_node!(ConstDeclaration, CONST_DECLARATION);
ast_node!(ConstSpec, CONST_SPEC);
ast_node!(ConstDefinition, CONST_DEFINITION);

impl ConstDeclaration {
    pub fn specs(&self) -> impl Iterator<Item = ConstSpec> + '_ {
        self.0.children().filter_map(ConstSpec::cast)
    }
}

impl ConstSpec {
    pub fn definitions(&self) -> impl Iterator<Item = ConstDefinition> + '_ {
        self.0.children().filter_map(ConstDefinition::cast)
    }
}

named!(
    PackageClause,
    FunctionDeclaration,
    MethodDeclaration,
    TypeSpec,
    VarDefinition,
    ConstDefinition,
);
