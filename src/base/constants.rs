//! Domain constants shared across the crate.

/// File extension of Go source files (without the dot).
pub const GO_EXTENSION: &str = "go";

/// Name of the program entry point function.
pub const MAIN_FUNCTION_NAME: &str = "main";

/// Package name of executable programs; never importable.
pub const MAIN_PACKAGE_NAME: &str = "main";

/// Suffix of external test packages (`foo_test` tests package `foo`).
pub const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Import map key used for dot imports.
pub const DOT_IMPORT_KEY: &str = ".";

/// Directory name that marks a GOPATH-style source root.
pub const SRC_DIR: &str = "src";

/// Environment variable listing GOPATH workspaces.
pub const GOPATH_ENV: &str = "GOPATH";

/// Environment variable pointing at the Go installation.
pub const GOROOT_ENV: &str = "GOROOT";
