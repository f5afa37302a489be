//! End-to-end query scenario and main-function lookup.

use rstest::rstest;

use goindex::{Unresolved, Workspace};

use crate::helpers::go_fixtures::*;
use crate::helpers::unit_helpers::*;

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_scenario(#[case] repr: Repr) {
    let unit = unit(repr, SCENARIO);

    assert_eq!(unit.package_name().as_deref(), Some("foo"));

    let imports = unit.imports();
    let paths: Vec<_> = imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["fmt", "os"]);

    assert_eq!(
        names(unit.functions().iter(), |f| f.name.as_str()),
        vec!["main", "helper"]
    );

    let main = unit.find_main_function().expect("main function");
    assert_eq!(main.name, "main");
    assert_eq!(main, unit.functions()[0]);

    let map = unit.import_map(&Unresolved);
    let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["fmt", "os"]);
    assert_eq!(map.get("fmt")[0], imports[0]);
    assert_eq!(map.get("os")[0], imports[1]);
}

#[test]
fn test_scenario_in_empty_workspace() {
    let ws = Workspace::default();
    let unit = ws.set_file("/home/me/foo/foo.go", SCENARIO);
    let map = unit.import_map(&ws);
    assert!(map.contains_key("fmt"));
    assert!(map.contains_key("os"));
    assert_eq!(ws.full_package_name(&unit), None);
}

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_main_declared_second(#[case] repr: Repr) {
    let unit = unit(repr, HELPER_THEN_MAIN);
    let main = unit.find_main_function().expect("main function");
    assert_eq!(main.name, "main");
    assert_eq!(main, unit.functions()[1]);
}

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_no_main(#[case] repr: Repr) {
    let unit = unit(repr, NO_MAIN);
    assert_eq!(unit.functions().len(), 2);
    assert!(unit.find_main_function().is_none());
}

#[test]
fn test_method_named_main_is_not_main_function() {
    let unit = unit(Repr::Tree, "package p\nfunc (s S) main() {}\n");
    assert!(unit.find_main_function().is_none());
}
