//! Tests for fragment spread expansion.

use crate::ast::QueryResult;
use crate::ast::Selection;
use crate::resolve_fragments;
use crate::tests::utils::field_names;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_upsert_query;
use crate::DqlParseErrorKind;
use crate::FragmentTable;

fn has_spreads(selections: &[Selection]) -> bool {
    selections.iter().any(|selection| match selection {
        Selection::FragmentSpread(_) => true,
        Selection::Field(node) => has_spreads(&node.selections),
    })
}

/// A spread is replaced by the fragment's selections, in place.
#[test]
fn spread_is_inlined_in_place() {
    let result = parse_upsert_query(
        "upsert { query { q(func: has(name)) { uid ...f dgraph.type } } fragment f { name age } }",
    );
    let root = &result.roots[0];
    assert_eq!(field_names(root), vec!["uid", "name", "age", "dgraph.type"]);
    assert!(!has_spreads(&root.selections));
}

/// Fragments may spread other fragments, and may be used before they are
/// defined.
#[test]
fn chained_fragments_defined_after_use() {
    let result = parse_upsert_query(
        "upsert {
            fragment outer { name ...inner }
            query { q(func: has(name)) { friend { ...outer } } }
            fragment inner { age }
        }",
    );
    let friend = result.roots[0].fields().next().unwrap();
    assert_eq!(field_names(friend), vec!["name", "age"]);
    assert!(!has_spreads(&result.roots[0].selections));
}

/// Spreads nested inside fields of a fragment are expanded too.
#[test]
fn spreads_inside_fragment_fields() {
    let result = parse_upsert_query(
        "upsert {
            query { q(func: has(name)) { ...person } }
            fragment person { name friend { ...pet } }
            fragment pet { species }
        }",
    );
    let root = &result.roots[0];
    assert_eq!(field_names(root), vec!["name", "friend"]);
    let friend = root.fields().nth(1).unwrap();
    assert_eq!(field_names(friend), vec!["species"]);
}

/// One fragment spread from several places expands the same way each time.
#[test]
fn fragment_reused_across_roots() {
    let result = parse_upsert_query(
        "upsert {
            query {
                a(func: has(name)) { ...f }
                b(func: has(age)) { uid ...f }
            }
            fragment f { name }
        }",
    );
    assert_eq!(field_names(&result.roots[0]), vec!["name"]);
    assert_eq!(field_names(&result.roots[1]), vec!["uid", "name"]);
}

/// Spreading an unknown fragment fails.
#[test]
fn undefined_fragment() {
    let error = parse_err("upsert { query { q(func: has(name)) { ...missing } } }");
    assert!(matches!(
        error.kind(),
        DqlParseErrorKind::UndefinedFragment { name } if name == "missing",
    ));
    assert_eq!(error.message(), "missing fragment `missing`");
}

/// Two fragments that spread each other form a cycle.
#[test]
fn mutual_cycle() {
    let error = parse_err(
        "upsert {
            query { q(func: has(name)) { ...f } }
            fragment f { name ...g }
            fragment g { age ...f }
        }",
    );
    match error.kind() {
        DqlParseErrorKind::FragmentCycle { cycle_path } => {
            assert_eq!(cycle_path, &vec!["f".to_string(), "g".to_string(), "f".to_string()]);
        },
        other => panic!("expected a fragment cycle, got {other:?}"),
    }
    assert_eq!(error.message(), "cycle detected in fragment spreads: f -> g -> f");
}

/// A fragment that spreads itself.
#[test]
fn self_cycle() {
    let error = parse_err(
        "upsert { query { q(func: has(name)) { ...f } } fragment f { name ...f } }",
    );
    assert!(matches!(
        error.kind(),
        DqlParseErrorKind::FragmentCycle { cycle_path } if cycle_path.len() == 2,
    ));
}

/// Fragments that are never spread are not checked.
#[test]
fn unused_fragments_are_ignored() {
    let result = parse_upsert_query(
        "upsert {
            query { q(func: has(name)) { uid } }
            fragment unused { ...nowhere }
        }",
    );
    assert_eq!(field_names(&result.roots[0]), vec!["uid"]);
}

/// Resolving a result without spreads leaves it untouched.
#[test]
fn no_spreads_is_noop() {
    let mut result = parse_upsert_query("upsert { query { q(func: has(name)) { uid name } } }");
    let before = result.clone();
    resolve_fragments(&mut result, &FragmentTable::new()).unwrap();
    assert_eq!(result, before);

    let mut empty = QueryResult::new();
    resolve_fragments(&mut empty, &FragmentTable::new()).unwrap();
    assert!(empty.is_empty());
}
