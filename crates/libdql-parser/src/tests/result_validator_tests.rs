//! Tests for result-level checks on upsert queries.

use crate::ast::QueryResult;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_upsert_query;
use crate::validate_result;
use crate::DqlErrorNoteKind;
use crate::DqlParseErrorKind;

/// Every root needs a `func` argument.
#[test]
fn root_without_func() {
    let error = parse_err("upsert { query { q(first: 1) { uid } } }");
    assert_eq!(error.kind(), &DqlParseErrorKind::InvalidResult);
    assert_eq!(error.message(), "root function required in query block `q`");
    assert!(error.notes().iter().any(|note| note.kind == DqlErrorNoteKind::Help));
}

/// A variable defined twice points back at the first definition.
#[test]
fn duplicate_variable() {
    let error = parse_err(
        "upsert { query {
            v as var(func: has(a)) { uid }
            v as var(func: has(b)) { uid }
        } }",
    );
    assert_eq!(error.message(), "variable `v` is defined more than once");
    let note = &error.notes()[0];
    assert_eq!(note.message, "first defined here");
    assert_eq!(note.span.as_ref().map(|span| span.start_inclusive.line()), Some(1));
    assert_eq!(error.span().start_inclusive.line(), 2);
}

/// Using a variable that nothing defines fails.
#[test]
fn undefined_variable() {
    let error = parse_err("upsert { query { q(func: uid(v)) { uid } } }");
    assert_eq!(error.kind(), &DqlParseErrorKind::InvalidResult);
    assert_eq!(error.message(), "variable `v` is used but not defined");
}

/// Usages inside directives are checked.
#[test]
fn undefined_variable_in_filter() {
    let error = parse_err("upsert { query { q(func: has(a)) @filter(uid(friends)) { uid } } }");
    assert_eq!(error.message(), "variable `friends` is used but not defined");
}

/// Value variables used as fields (`total: val(s)`) are checked.
#[test]
fn value_variable_fields() {
    parse_upsert_query("upsert { query { q(func: has(a)) { s as score total: val(s) } } }");

    let error = parse_err("upsert { query { q(func: has(a)) { total: val(t) } } }");
    assert_eq!(error.message(), "variable `t` is used but not defined");
}

/// Variables are shared across query sections and nesting levels.
#[test]
fn variables_across_sections() {
    let result = parse_upsert_query(
        "upsert {
            query { me(func: eq(email, \"a@b.c\")) { f as friend } }
            query { q(func: uid(f)) { name } }
        }",
    );
    assert_eq!(result.len(), 2);
}

/// Defined-but-unused variables are fine; the mutation may refer to them.
#[test]
fn unused_variable_is_allowed() {
    let result = parse_upsert_query(
        "upsert {
            query { v as var(func: eq(email, \"a@b.c\")) { uid } }
            mutation { set { uid(v) <name> \"x\" . } }
        }",
    );
    assert_eq!(result.roots[0].var_name.as_deref(), Some("v"));
}

/// Non-variable function arguments are not treated as usages.
#[test]
fn other_functions_are_not_usages() {
    parse_upsert_query("upsert { query { q(func: eq(name, alice)) @filter(has(friend)) { uid } } }");
}

/// An empty result has nothing to check.
#[test]
fn empty_result() {
    assert!(validate_result(&QueryResult::new()).is_ok());
}
