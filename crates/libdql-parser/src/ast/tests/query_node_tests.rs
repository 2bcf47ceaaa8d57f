//! Tests for [`crate::ast::QueryNode`] and its selections.

use crate::ast::tests::ast_test_utils::leaf;
use crate::ast::tests::ast_test_utils::name_value;
use crate::ast::tests::ast_test_utils::named;
use crate::ast::tests::ast_test_utils::positional;
use crate::ast::tests::ast_test_utils::with_fields;
use crate::ast::tests::ast_test_utils::zero_span;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::ast::Value;

/// Every part of a node appears in synthetic mode.
#[test]
fn full_node_rendering() {
    let mut node = with_fields(leaf("friend"), vec![leaf("name")]);
    node.alias = Some("friends".to_string());
    node.var_name = Some("f".to_string());
    node.arguments = vec![named(
        "orderasc",
        Value::Iri { span: zero_span(), iri: "name".to_string() },
    )];
    node.directives = vec![
        Directive {
            span: zero_span(),
            name: "filter".to_string(),
            arguments: vec![positional(Value::Call {
                span: zero_span(),
                name: "has".to_string(),
                arguments: vec![positional(name_value("email"))],
            })],
        },
        Directive {
            span: zero_span(),
            name: "cascade".to_string(),
            arguments: vec![],
        },
    ];

    assert_eq!(
        node.to_source(None),
        "friends: f as friend(orderasc: <name>) @filter(has(email)) @cascade { name }",
    );
}

/// A bare leaf renders as just its attribute.
#[test]
fn leaf_rendering() {
    assert_eq!(leaf("uid").to_source(None), "uid");
}

/// `argument()` finds named arguments only.
#[test]
fn argument_lookup() {
    let mut node = leaf("q");
    node.arguments = vec![
        positional(name_value("func")),
        named("func", name_value("has")),
    ];
    assert_eq!(node.argument("func").and_then(|arg| arg.value.as_name()), Some("has"));
    assert!(node.argument("first").is_none());
}

/// `fields()` skips unresolved spreads.
#[test]
fn fields_skip_spreads() {
    let mut node = with_fields(leaf("q"), vec![leaf("a"), leaf("b")]);
    node.selections.insert(
        1,
        Selection::FragmentSpread(FragmentSpread {
            span: zero_span(),
            name: "f".to_string(),
        }),
    );
    let names: Vec<_> = node.fields().map(|field| field.attribute.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(node.to_source(None), "q { a ...f b }");
    assert!(node.selections[1].as_field().is_none());
}

#[test]
fn fragment_definition_rendering() {
    let fragment = FragmentDefinition {
        span: zero_span(),
        name: "person".to_string(),
        selections: vec![Selection::Field(leaf("name")), Selection::Field(leaf("age"))],
    };
    assert_eq!(fragment.to_source(None), "fragment person { name age }");
}
