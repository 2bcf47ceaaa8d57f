//! Tests for [`crate::ast::Value`].

use crate::ast::tests::ast_test_utils::make_byte_span;
use crate::ast::tests::ast_test_utils::name_value;
use crate::ast::tests::ast_test_utils::named;
use crate::ast::tests::ast_test_utils::positional;
use crate::ast::tests::ast_test_utils::zero_span;
use crate::ast::AstNode;
use crate::ast::Value;

/// Strings are re-quoted with escapes in synthetic mode.
#[test]
fn string_value_is_requoted() {
    let value = Value::String {
        span: zero_span(),
        value: "say \"hi\"\n\\".to_string(),
    };
    assert_eq!(value.to_source(None), r#""say \"hi\"\n\\""#);
}

/// Calls render with comma-separated arguments.
#[test]
fn call_value() {
    let value = Value::Call {
        span: zero_span(),
        name: "eq".to_string(),
        arguments: vec![
            positional(name_value("name")),
            positional(Value::List {
                span: zero_span(),
                values: vec![
                    Value::Int { span: zero_span(), raw: "0x1".to_string() },
                    Value::Variable { span: zero_span(), name: "ids".to_string() },
                ],
            }),
        ],
    };
    assert_eq!(value.to_source(None), "eq(name, [0x1, $ids])");
}

/// Groups, IRIs and floats.
#[test]
fn group_iri_and_float() {
    let value = Value::Group {
        span: zero_span(),
        values: vec![
            Value::Iri { span: zero_span(), iri: "friend.of".to_string() },
            name_value("or"),
            Value::Float { span: zero_span(), raw: "-1.5e3".to_string() },
        ],
    };
    assert_eq!(value.to_source(None), "(<friend.of>, or, -1.5e3)");
}

/// Named arguments render as `name: value`.
#[test]
fn named_argument() {
    let argument = named("first", Value::Int { span: zero_span(), raw: "10".to_string() });
    assert_eq!(argument.to_source(None), "first: 10");
}

/// Source-slice mode returns the exact source range.
#[test]
fn source_slice() {
    let source = r#"eq(name,   "x")"#;
    let value = Value::String {
        span: make_byte_span(11, 14),
        value: "x".to_string(),
    };
    assert_eq!(value.to_source(Some(source)), "\"x\"");
}

#[test]
fn accessors() {
    let value = name_value("v");
    assert_eq!(value.as_name(), Some("v"));
    assert_eq!(value.span(), &zero_span());
    let int = Value::Int { span: make_byte_span(1, 2), raw: "1".to_string() };
    assert_eq!(int.as_name(), None);
    assert_eq!(int.span().end_exclusive.byte_offset(), 2);
}
