//! Structural index tests
//!
//! Tests for the query surface of source units:
//! - Stub and tree paths agreeing on every query
//! - Placeholder nodes staying invisible
//! - Stamp-keyed cache coherence
//! - Import maps and directory package names
//! - Main-function lookup and import insertion

mod tests_add_import;
mod tests_cache_coherence;
mod tests_dual_path;
mod tests_import_map;
mod tests_scenario;
