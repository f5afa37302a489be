//! Parser tests
//!
//! Structural parsing of Go sources and error recovery.
