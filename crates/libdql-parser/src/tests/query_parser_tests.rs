//! Tests for the query grammar inside upsert blocks.

use crate::ast::AstNode;
use crate::ast::QueryResult;
use crate::ast::Selection;
use crate::ast::Value;
use crate::tests::utils::field_names;
use crate::tests::utils::mock_close_token;
use crate::tests::utils::mock_eof_token;
use crate::tests::utils::mock_name_token;
use crate::tests::utils::mock_open_token;
use crate::tests::utils::mock_token;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_upsert_query;
use crate::tests::utils::MockTokenSource;
use crate::token::DqlTokenKind;
use crate::DelimiterContext;
use crate::DqlParseErrorKind;
use crate::DqlParser;
use crate::DqlParserOptions;

fn single_root(query: &str) -> QueryResult {
    parse_upsert_query(&format!("upsert {{ query {{ {query} }} }}"))
}

/// `parse_query` can be driven directly from a parser positioned on `{`.
#[test]
fn parse_query_directly() {
    let mut parser = DqlParser::new("{ q(func: has(a)) { uid } r(func: has(b)) { uid } }");
    assert!(parser.advance().unwrap());

    let mut result = QueryResult::new();
    parser
        .parse_query(&mut result, DelimiterContext::QueryBlock)
        .unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.root("r").is_some());
}

/// `parse_fragment_definition` can be driven from a custom token source.
#[test]
fn parse_fragment_definition_directly() {
    let tokens = vec![
        mock_token(DqlTokenKind::definition_owned("fragment".to_string())),
        mock_name_token("f"),
        mock_open_token(),
        mock_name_token("a"),
        mock_name_token("b"),
        mock_close_token(),
        mock_eof_token(),
    ];
    let mut parser = DqlParser::from_token_source(MockTokenSource::new(tokens));
    assert!(parser.advance().unwrap());

    let fragment = parser.parse_fragment_definition().unwrap();
    assert_eq!(fragment.name, "f");
    assert_eq!(fragment.to_source(None), "fragment f { a b }");
}

/// Roots may define a variable (`v as var(...)`).
#[test]
fn root_variable_definition() {
    let result = single_root("v as var(func: has(name)) { uid } q(func: uid(v)) { name }");
    assert_eq!(result.roots[0].var_name.as_deref(), Some("v"));
    assert_eq!(result.roots[0].attribute, "var");

    let func = &result.roots[1].argument("func").unwrap().value;
    match func {
        Value::Call { name, arguments, .. } => {
            assert_eq!(name, "uid");
            assert_eq!(arguments[0].value.as_name(), Some("v"));
        },
        other => panic!("expected a call, got {other:?}"),
    }
}

/// Aliases, arguments and nested selections on fields.
#[test]
fn field_alias_arguments_and_nesting() {
    let result = single_root("q(func: has(name)) { n: name friends: friend(first: 10) { name } }");
    let root = &result.roots[0];
    assert_eq!(field_names(root), vec!["name", "friend"]);

    let fields: Vec<_> = root.fields().collect();
    assert_eq!(fields[0].alias.as_deref(), Some("n"));
    assert_eq!(fields[1].alias.as_deref(), Some("friends"));
    assert!(matches!(
        &fields[1].argument("first").unwrap().value,
        Value::Int { raw, .. } if raw == "10",
    ));
    assert_eq!(field_names(fields[1]), vec!["name"]);
}

/// Directives with and without arguments, including grouped filters.
#[test]
fn directives() {
    let result = single_root(
        "q(func: has(name)) @filter((has(a) or has(b)) and has(c)) @cascade { uid }",
    );
    let directives = &result.roots[0].directives;
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].name, "filter");
    assert_eq!(directives[0].arguments.len(), 3);
    assert!(matches!(&directives[0].arguments[0].value, Value::Group { values, .. } if values.len() == 3));
    assert_eq!(directives[0].arguments[1].value.as_name(), Some("and"));
    assert_eq!(directives[1].name, "cascade");
    assert!(directives[1].arguments.is_empty());
}

/// Every kind of value literal.
#[test]
fn value_literals() {
    let result = single_root(
        r#"q(func: eq(name, ["a", "b"]), orderasc: <name>, offset: $off, x: 1.5e3, y: -2, z: 0x1f) { uid }"#,
    );
    let root = &result.roots[0];

    assert!(matches!(
        &root.argument("func").unwrap().value,
        Value::Call { arguments, .. }
            if matches!(&arguments[1].value, Value::List { values, .. } if values.len() == 2),
    ));
    assert!(matches!(&root.argument("orderasc").unwrap().value, Value::Iri { iri, .. } if iri == "name"));
    assert!(matches!(&root.argument("offset").unwrap().value, Value::Variable { name, .. } if name == "off"));
    assert!(matches!(&root.argument("x").unwrap().value, Value::Float { raw, .. } if raw == "1.5e3"));
    assert!(matches!(&root.argument("y").unwrap().value, Value::Int { raw, .. } if raw == "-2"));
    assert!(matches!(&root.argument("z").unwrap().value, Value::Int { raw, .. } if raw == "0x1f"));
}

/// String values are unescaped.
#[test]
fn string_escapes() {
    let result = single_root(r#"q(func: eq(name, "a \"quoted\" é\n")) { uid }"#);
    let Value::Call { arguments, .. } = &result.roots[0].argument("func").unwrap().value else {
        panic!("expected a call");
    };
    assert!(matches!(
        &arguments[1].value,
        Value::String { value, .. } if value == "a \"quoted\" é\n",
    ));
}

/// `expand(_all_)` is a field with a positional argument.
#[test]
fn expand_all() {
    let result = single_root("q(func: has(name)) { expand(_all_) }");
    let field = result.roots[0].fields().next().unwrap();
    assert_eq!(field.attribute, "expand");
    assert_eq!(field.arguments[0].value.as_name(), Some("_all_"));
    assert_eq!(field.arguments[0].name, None);
}

/// Synthetic rendering normalizes spacing; source slicing is lossless.
#[test]
fn root_rendering() {
    let query = r#"q(func:eq(name,"x") first:2)@filter(has(age)){n:name f as friend @facets{uid}}"#;
    let source = format!("upsert {{ query {{ {query} }} }}");
    let result = parse_upsert_query(&source);
    let root = &result.roots[0];

    assert_eq!(
        root.to_source(None),
        r#"q(func: eq(name, "x"), first: 2) @filter(has(age)) { n: name f as friend @facets { uid } }"#,
    );
    assert_eq!(root.to_source(Some(&source)), query);
}

/// Nesting deeper than the configured limit fails.
#[test]
fn recursion_limit() {
    let source = "upsert { query { q(func: has(a)) { a { b { c { d } } } } } }";
    let shallow = DqlParserOptions::default().max_recursion_depth(3);
    let error = crate::parse_mutation_with_options(source, &shallow).unwrap_err();
    assert!(matches!(
        error.kind(),
        DqlParseErrorKind::RecursionLimitExceeded { limit: 3 },
    ));

    let deep_enough = DqlParserOptions::default().max_recursion_depth(4);
    assert!(crate::parse_mutation_with_options(source, &deep_enough).is_ok());
}

/// A root without a selection set.
#[test]
fn root_requires_selection_set() {
    let error = parse_err("upsert { query { q(func: has(a)) } }");
    assert!(matches!(
        error.kind(),
        DqlParseErrorKind::UnexpectedToken { found, .. } if found == "}",
    ));
    assert_eq!(error.message(), "expected `{` after query block `q`, found `}`");
}

/// A punctuator where a value belongs.
#[test]
fn missing_argument_value() {
    let error = parse_err("upsert { query { q(func: @) { uid } } }");
    assert_eq!(error.message(), "expected a value, found `@`");
}

/// A spread without a fragment name.
#[test]
fn spread_without_name() {
    let error = parse_err("upsert { query { q(func: has(a)) { ... } } }");
    assert_eq!(error.message(), "expected fragment name after `...`, found `}`");
}

/// Fields must be plain names.
#[test]
fn iri_is_not_a_field() {
    let error = parse_err("upsert { query { q(func: has(a)) { <name> } } }");
    assert_eq!(error.message(), "expected a field or fragment spread, found `<name>`");
}

/// Spreads stay unresolved until the upsert block closes.
#[test]
fn spreads_are_selections() {
    let tokens = vec![
        mock_open_token(),
        mock_name_token("q"),
        mock_open_token(),
        mock_token(DqlTokenKind::Ellipsis),
        mock_name_token("f"),
        mock_close_token(),
        mock_close_token(),
        mock_eof_token(),
    ];
    let mut parser = DqlParser::from_token_source(MockTokenSource::new(tokens));
    assert!(parser.advance().unwrap());

    let mut result = QueryResult::new();
    parser
        .parse_query(&mut result, DelimiterContext::QueryBlock)
        .unwrap();
    assert!(matches!(
        &result.roots[0].selections[0],
        Selection::FragmentSpread(spread) if spread.name == "f",
    ));
}
