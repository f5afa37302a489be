//! Foundation types for the Go index.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Workspace-unique file identifiers
//! - [`Stamp`] - Monotonic content version tokens
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Domain constants (file extension, well-known names)
//!
//! This module has NO dependencies on other modules of the crate.

pub mod constants;
mod file_id;
mod stamp;

pub use file_id::FileId;
pub use stamp::Stamp;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
