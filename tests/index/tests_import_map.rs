//! Import alias maps against a workspace of sibling packages.

use goindex::{Unresolved, Workspace, WorkspaceConfig};

const ROOT: &str = "/go/src";

fn workspace() -> Workspace {
    let ws = Workspace::new(WorkspaceConfig::new().with_source_root(ROOT));
    ws.set_file("/go/src/example.com/util/util.go", "package util\n");
    ws.set_file("/go/src/example.com/util/util_test.go", "package util_test\n");
    ws.set_file("/go/src/example.com/multi/a.go", "package alpha\n");
    ws.set_file("/go/src/example.com/multi/b.go", "package beta\n");
    ws.set_file("/go/src/example.com/cmd/main.go", "package main\n");
    ws
}

// =============================================================================
// KEY SELECTION
// =============================================================================

#[test]
fn test_explicit_alias_maps_only_that_spec() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport (\n\tx \"example.com/util\"\n\t\"fmt\"\n)\n",
    );
    let map = unit.import_map(&ws);
    assert_eq!(map.get("x").len(), 1);
    assert_eq!(map.get("x")[0].path, "example.com/util");
    assert!(!map.contains_key("util"));
}

#[test]
fn test_dot_import_key() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport . \"example.com/util\"\n",
    );
    let map = unit.import_map(&ws);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["."]);
}

#[test]
fn test_directory_package_names_with_test_suffix() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport \"example.com/util\"\n",
    );
    let map = unit.import_map(&ws);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["util"]);
    assert_eq!(map.get("util").len(), 1);

    let dir = ws
        .directory(std::path::Path::new("/go/src/example.com/util"))
        .expect("util directory");
    let names: Vec<_> = dir.package_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, vec!["util"]);
}

#[test]
fn test_directory_with_several_packages() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport \"example.com/multi\"\n",
    );
    let map = unit.import_map(&ws);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["alpha", "beta"]);
    assert_eq!(map.get("alpha"), map.get("beta"));
}

#[test]
fn test_main_only_directory_falls_back_to_path_name() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport \"example.com/cmd\"\n",
    );
    let map = unit.import_map(&ws);
    assert!(map.contains_key("cmd"));
}

#[test]
fn test_relative_import_resolves_from_importing_directory() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport \"../multi\"\n",
    );
    let map = unit.import_map(&ws);
    assert!(map.contains_key("alpha"));
    assert!(!map.contains_key("multi"));
}

#[test]
fn test_unresolved_uses_heuristic_names() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport (\n\t\"gopkg.in/yaml.v2\"\n\t\"github.com/google/go-cmp\"\n\t\"example.com/trailing/\"\n)\n",
    );
    let map = unit.import_map(&Unresolved);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["yaml_v2", "go_cmp"]);
}

// =============================================================================
// DIRECTORY CACHE
// =============================================================================

#[test]
fn test_directory_names_follow_sibling_edits() {
    let ws = workspace();
    let unit = ws.set_file(
        "/go/src/example.com/app/app.go",
        "package app\nimport \"example.com/util\"\n",
    );
    assert!(unit.import_map(&ws).contains_key("util"));

    ws.set_file("/go/src/example.com/util/util.go", "package tools\n");
    let map = unit.import_map(&ws);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["tools", "util"]);

    ws.remove_file(std::path::Path::new("/go/src/example.com/util/util_test.go"));
    let map = unit.import_map(&ws);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["tools"]);
}
