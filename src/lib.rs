//! # goindex-base
//!
//! Core library for lazy, cache-coherent structural indexing of Go source
//! files: package clause, imports, top-level declarations and import alias
//! resolution, answered from a stub or from the syntax tree on demand.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace, directory loading, import path resolution
//!   ↓
//! index     → SourceUnit queries, stubs, stamp-keyed caches, directories
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (FileId, Stamp, TextRange, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → index → project)
// ============================================================================

/// Foundation types: FileId, Stamp, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST, green-tree edits
pub mod parser;

/// Structural index: dual-path queries, caches, directory package names
pub mod index;

/// Project management: workspace, loading, import resolution
pub mod project;

// Re-export foundation types
pub use base::{FileId, Stamp, TextRange, TextSize};

// Re-export the query surface
pub use index::{
    ConstDefinition, Directory, FileStub, FunctionDecl, ImportMap, ImportResolver, ImportSpec,
    MethodDecl, PackageClause, SourceUnit, TypeSpec, Unresolved, VarDefinition,
};
pub use project::{LoadError, Workspace, WorkspaceConfig};
