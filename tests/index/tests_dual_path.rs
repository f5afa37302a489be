//! Stub and tree answers must agree.

use rstest::rstest;

use crate::helpers::go_fixtures::*;
use crate::helpers::unit_helpers::*;

// =============================================================================
// EQUIVALENCE
// =============================================================================

#[rstest]
#[case(SCENARIO)]
#[case(SHAPES)]
#[case(HELPER_THEN_MAIN)]
#[case(NO_MAIN)]
#[case("package empty\n")]
fn test_stub_and_tree_agree(#[case] source: &str) {
    let tree = unit(Repr::Tree, source);
    let stub = unit(Repr::Stub, source);
    assert!(tree.stub().is_none());
    assert!(stub.stub().is_some());

    assert_eq!(stub.package_name(), tree.package_name());
    assert_eq!(stub.package_clause(), tree.package_clause());
    assert_eq!(*stub.functions(), *tree.functions());
    assert_eq!(*stub.methods(), *tree.methods());
    assert_eq!(*stub.types(), *tree.types());
    assert_eq!(*stub.vars(), *tree.vars());
    assert_eq!(*stub.constants(), *tree.constants());
    assert_eq!(*stub.imports(), *tree.imports());
    assert_eq!(stub.find_main_function(), tree.find_main_function());
}

#[test]
fn test_walk_sequences_agree() {
    let collect = |repr| {
        let unit = unit(repr, SHAPES);
        let mut seen = Vec::new();
        unit.walk(|node| {
            seen.push((node.kind(), node.text_range()));
            true
        });
        seen
    };
    assert_eq!(collect(Repr::Stub), collect(Repr::Tree));
}

#[test]
fn test_walk_abort_is_honored_on_both_paths() {
    for repr in [Repr::Stub, Repr::Tree] {
        let unit = unit(repr, SHAPES);
        let mut visited = 0;
        let completed = unit.walk(|_| {
            visited += 1;
            visited < 2
        });
        assert!(!completed, "{repr:?}");
        assert_eq!(visited, 2, "{repr:?}");
    }
}

#[test]
fn test_stub_path_never_builds_tree() {
    let unit = stub_only(SHAPES);
    assert_eq!(unit.package_name().as_deref(), Some("shapes"));
    assert_eq!(unit.functions().len(), 2);
    assert_eq!(unit.imports().len(), 5);
    assert_eq!(unit.vars().len(), 4);
    unit.walk(|_| true);
    assert!(!unit.is_tree_loaded());
}

// =============================================================================
// FLATTENING
// =============================================================================

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_declarations_flatten_in_order(#[case] repr: Repr) {
    let unit = unit(repr, SHAPES);

    assert_eq!(
        names(unit.functions().iter(), |f| f.name.as_str()),
        vec!["NewCircle", "Map"]
    );
    assert_eq!(
        names(unit.types().iter(), |t| t.name.as_str()),
        vec!["Shape", "Circle", "Square"]
    );
    assert_eq!(
        names(unit.vars().iter(), |v| v.name.as_str()),
        vec!["registry", "x", "y", "counter"]
    );
    assert_eq!(
        names(unit.constants().iter(), |c| c.name.as_str()),
        vec!["Pi", "A", "B", "C"]
    );

    let methods = unit.methods();
    let receivers: Vec<_> = methods
        .iter()
        .map(|m| (m.name.as_str(), m.receiver_type.as_deref()))
        .collect();
    assert_eq!(receivers, vec![("Area", Some("Circle")), ("Area", Some("Square"))]);
}

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_imports_keep_declaration_order(#[case] repr: Repr) {
    let unit = unit(repr, SHAPES);
    let imports = unit.imports();
    let forms: Vec<_> = imports
        .iter()
        .map(|i| (i.path.as_str(), i.alias.as_deref(), i.dot))
        .collect();
    assert_eq!(
        forms,
        vec![
            ("fmt", None, false),
            ("math", Some("m"), false),
            ("strings", None, true),
            ("embed", Some("_"), false),
            ("os", None, false),
        ]
    );
    assert!(imports[3].is_blank());
}

#[rstest]
#[case(Repr::Stub, 0)]
#[case(Repr::Tree, 0)]
#[case(Repr::Stub, 1)]
#[case(Repr::Tree, 1)]
#[case(Repr::Stub, 7)]
#[case(Repr::Tree, 7)]
fn test_function_count(#[case] repr: Repr, #[case] count: usize) {
    let mut source = String::from("package p\n\n");
    for i in 0..count {
        source.push_str(&format!("func f{i}() {{}}\n\n"));
    }
    source.push_str("func (r R) notAFunction() {}\n");
    let unit = unit(repr, &source);
    assert_eq!(unit.functions().len(), count);
    assert_eq!(unit.methods().len(), 1);
}

// =============================================================================
// MISSING PIECES
// =============================================================================

#[rstest]
#[case(Repr::Stub)]
#[case(Repr::Tree)]
fn test_missing_package_clause(#[case] repr: Repr) {
    let unit = unit(repr, NO_PACKAGE);
    assert_eq!(unit.package_name(), None);
    assert_eq!(unit.package_clause(), None);
    assert!(unit.imports().is_empty());
    assert_eq!(unit.functions().len(), 1);
}

#[test]
fn test_package_name_is_trimmed() {
    let unit = unit(Repr::Tree, "package /* c */ spaced // trailing\n");
    assert_eq!(unit.package_name().as_deref(), Some("spaced"));
}
