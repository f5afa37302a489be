//! Rowan-based parser for the structural layer of Go
//!
//! This module provides a lossless, error-recovering parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone, Send + Sync)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! index → Stub / Tree backed structural queries
//! ```
//!
//! Only declarations are structured. Function bodies, signatures and spec
//! tails are kept as balanced token runs, which is all the index needs.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod edit;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{
    GoLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
