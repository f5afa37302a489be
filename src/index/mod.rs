//! Lazy, cache-coherent structural index of Go source units.
//!
//! ## Architecture
//!
//! ```text
//! SourceUnit ──► UnitContent (stamp, text, stub?, tree on demand)
//!     │                 │
//!     │          SourceIndex::{Stub, Tree}   one representation per query
//!     │                 │
//!     │          walk (stub-plain-list │ placeholder-transparent tree)
//!     ▼
//! ValueCache ◄── memoized answers keyed on the stamp
//!     ▲
//! Directory ──► package_names()  (stamp = max over members)
//!     ▲
//! import_map(resolver)
//! ```
//!
//! Queries never fail. A unit without a package clause has no package name,
//! malformed regions are skipped, and unresolvable imports fall back to a
//! name derived from the import path.

mod cache;
mod directory;
mod import_map;
mod items;
mod node;
mod queries;
mod stub;
mod unit;
pub mod walk;

pub use cache::{CacheKey, ValueCache, Versioned};
pub use directory::Directory;
pub use import_map::{ImportMap, ImportResolver, Unresolved};
pub use items::{
    ConstDefinition, FunctionDecl, ImportSpec, IndexItem, MethodDecl, PackageClause, TypeSpec,
    VarDefinition, local_package_name,
};
pub use node::IndexNode;
pub use queries::SourceIndex;
pub use stub::{FileStub, StubElement};
pub use unit::{SourceUnit, UnitContent};
