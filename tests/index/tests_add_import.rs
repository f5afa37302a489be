//! Inserting imports through the import list.

use goindex::index::Versioned;
use rstest::rstest;

use crate::helpers::go_fixtures::*;
use crate::helpers::unit_helpers::*;

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_add_import_appends_spec(#[case] repr: Repr) {
    let unit = unit(repr, SCENARIO);
    let before = unit.stamp();

    let spec = unit.add_import("strings", None).expect("import added");
    assert_eq!(spec.path, "strings");
    assert_eq!(spec.alias, None);
    assert!(unit.stamp() > before);
    assert!(unit.stub().is_none());

    let paths: Vec<_> = unit.imports().iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, vec!["fmt", "os", "strings"]);
    assert_eq!(&unit.text()[spec.range], "\"strings\"");
}

#[test]
fn test_add_import_into_empty_list() {
    let unit = unit(Repr::Tree, HELPER_THEN_MAIN);
    assert!(unit.import_list().is_some_and(|list| list.is_empty()));

    let spec = unit.add_import("os", Some("o")).expect("import added");
    assert_eq!(spec.alias.as_deref(), Some("o"));
    assert!(unit.text().starts_with("package main\n\nimport o \"os\"\n\nfunc helper"));
    assert_eq!(unit.functions().len(), 2);
}

#[test]
fn test_add_dot_import() {
    let unit = unit(Repr::Tree, SCENARIO);
    let spec = unit.add_import("math", Some(".")).expect("import added");
    assert!(spec.dot);
    assert_eq!(unit.import_map(&goindex::Unresolved).get(".").len(), 1);
}

#[test]
fn test_add_import_without_import_list() {
    let unit = unit(Repr::Tree, NO_PACKAGE);
    let before = unit.stamp();
    assert!(unit.import_list().is_none());
    assert!(unit.add_import("fmt", None).is_none());
    assert_eq!(unit.stamp(), before);
}

#[rstest]
#[case("package p")]
#[case("package p // c")]
#[case("package p /* c */")]
fn test_add_import_text_reparses(#[case] source: &str) {
    let edited = unit(Repr::Tree, source);
    edited.add_import("os", None).expect("import added");

    let reparsed = unit(Repr::Tree, &edited.text());
    assert_eq!(reparsed.package_name().as_deref(), Some("p"));
    let paths: Vec<_> = reparsed.imports().iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, vec!["os"]);
    assert_eq!(*reparsed.imports(), *edited.imports());
}

#[rstest]
#[case("my-alias")]
#[case("func")]
#[case("9lives")]
fn test_add_import_rejects_invalid_alias(#[case] alias: &str) {
    let unit = unit(Repr::Tree, SCENARIO);
    let before = unit.stamp();
    assert!(unit.add_import("strings", Some(alias)).is_none());
    assert_eq!(unit.stamp(), before);
    assert_eq!(&*unit.text(), SCENARIO);
}
