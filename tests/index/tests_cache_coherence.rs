//! Memoized answers follow the unit's stamp.

use std::sync::Arc;

use goindex::index::Versioned;

use crate::helpers::go_fixtures::*;
use crate::helpers::unit_helpers::*;

#[test]
fn test_repeated_query_is_memoized() {
    let unit = unit(Repr::Tree, SHAPES);
    let first = unit.functions();
    let second = unit.functions();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&unit.imported_packages_map(), &unit.imported_packages_map()));
}

#[test]
fn test_stamp_advance_recomputes() {
    let unit = unit(Repr::Tree, SCENARIO);
    let before_stamp = unit.stamp();
    let before = unit.functions();

    unit.set_text("package foo\n\nfunc only() {}\n");
    assert!(unit.stamp() > before_stamp);

    let after = unit.functions();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(names(after.iter(), |f| f.name.as_str()), vec!["only"]);
    assert_eq!(names(before.iter(), |f| f.name.as_str()), vec!["main", "helper"]);
}

#[test]
fn test_unchanged_text_still_gets_fresh_values_after_edit() {
    let unit = unit(Repr::Tree, SCENARIO);
    let before = unit.imports();
    unit.set_text(SCENARIO);
    let after = unit.imports();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn test_commit_keeps_answers_equal() {
    let unit = unit(Repr::Tree, SHAPES);
    let from_tree = unit.types();
    assert!(unit.commit_stub());
    assert_eq!(*unit.types(), *from_tree);
}

#[test]
fn test_concurrent_queries_agree() {
    let unit = unit(Repr::Tree, SHAPES);
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (unit.vars(), unit.imported_packages_map())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (vars, imports) in &results {
        assert_eq!(**vars, *results[0].0);
        assert_eq!(**imports, *results[0].1);
    }
}

#[test]
fn test_imported_packages_map_last_write_wins() {
    let unit = unit(
        Repr::Tree,
        "package p\nimport (\n\ta \"x/y\"\n\tb \"x/y\"\n\t\"z\"\n)\n",
    );
    let map = unit.imported_packages_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["x/y"].alias.as_deref(), Some("b"));
    assert!(map.contains_key("z"));
}

#[test]
fn test_package_name_under_concurrent_edits() {
    let unit = unit(Repr::Tree, "package a\n");
    std::thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..200 {
                let name = if round % 2 == 0 { "b" } else { "a" };
                unit.set_text(format!("package {name}\n"));
                unit.commit_stub();
            }
        });
        scope.spawn(|| {
            for _ in 0..400 {
                let name = unit.package_name();
                assert!(matches!(name.as_deref(), Some("a" | "b")), "{name:?}");
            }
        });
    });
    assert_eq!(unit.package_name().as_deref(), Some("a"));
    assert_eq!(unit.package_clause().and_then(|c| c.name).as_deref(), Some("a"));
}
