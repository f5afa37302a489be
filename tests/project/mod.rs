//! Workspace tests
//!
//! Loading directories from disk, stub commits and package naming.
