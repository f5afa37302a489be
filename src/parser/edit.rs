//! Green-tree edits on the import list.

use rowan::{GreenNode, GreenNodeBuilder, GreenToken, NodeOrToken};

use super::ast::{AstNode, ImportList};
use super::lexer::tokenize;
use super::syntax_kind::SyntaxKind;

/// Build a standalone `import alias "path"` declaration.
///
/// An alias of `"."` produces a dot import; an empty alias is ignored.
pub fn import_declaration(path: &str, alias: Option<&str>) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::IMPORT_DECLARATION.into());
    builder.token(SyntaxKind::IMPORT_KW.into(), "import");
    builder.token(SyntaxKind::WHITESPACE.into(), " ");
    builder.start_node(SyntaxKind::IMPORT_SPEC.into());
    match alias {
        Some(".") => {
            builder.token(SyntaxKind::DOT.into(), ".");
            builder.token(SyntaxKind::WHITESPACE.into(), " ");
        }
        Some(alias) if !alias.is_empty() => {
            builder.token(SyntaxKind::IDENT.into(), alias);
            builder.token(SyntaxKind::WHITESPACE.into(), " ");
        }
        _ => {}
    }
    builder.start_node(SyntaxKind::IMPORT_STRING.into());
    builder.token(SyntaxKind::STRING.into(), &quote(path));
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    builder.finish()
}

fn quote(path: &str) -> String {
    format!("\"{}\"", path.replace('\\', "\\\\").replace('"', "\\\""))
}

fn whitespace(text: &str) -> NodeOrToken<GreenNode, GreenToken> {
    NodeOrToken::Token(GreenToken::new(SyntaxKind::WHITESPACE.into(), text))
}

/// Whether `alias` can name an import: `.`, or a single non-keyword identifier.
pub fn is_valid_alias(alias: &str) -> bool {
    alias == "." || matches!(tokenize(alias).as_slice(), [token] if token.kind == SyntaxKind::IDENT)
}

/// Append a new import declaration to `list`.
///
/// Returns the green root of the edited tree; the original tree is untouched.
/// Returns `None` if `alias` is not a valid import alias.
pub fn insert_import(list: &ImportList, path: &str, alias: Option<&str>) -> Option<GreenNode> {
    let alias = alias.filter(|alias| !alias.is_empty());
    if alias.is_some_and(|alias| !is_valid_alias(alias)) {
        return None;
    }
    let node = list.syntax();
    let green = node.green();
    let declaration = NodeOrToken::Node(import_declaration(path, alias));
    let len = green.children().count();
    let edited = if list.is_empty() {
        // The declaration must start on a fresh line.
        let root = node.ancestors().last().unwrap_or_else(|| node.clone());
        let text = root.to_string();
        let head = &text[..usize::from(node.text_range().end())];
        let green = if head.is_empty() || head.ends_with('\n') {
            green.into_owned()
        } else {
            green.insert_child(len, whitespace("\n\n"))
        };
        let len = green.children().count();
        green
            .insert_child(len, declaration)
            .insert_child(len + 1, whitespace("\n\n"))
    } else {
        green
            .insert_child(len, whitespace("\n"))
            .insert_child(len + 1, declaration)
    };
    Some(node.replace_with(edited))
}
