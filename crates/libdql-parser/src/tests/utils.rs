//! Various test utils.

use crate::ast::QueryNode;
use crate::ast::QueryResult;
use crate::token::DqlToken;
use crate::token::DqlTokenKind;
use crate::DqlParseError;
use crate::DqlSourceSpan;
use crate::ParsedMutation;
use crate::SourcePosition;
use smallvec::smallvec;

/// Creates a mock token with the given kind and minimal span/trivia.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: DqlTokenKind<'static>) -> DqlToken<'static> {
    let pos = SourcePosition::new(0, 0, Some(0), 0);
    DqlToken {
        kind,
        preceding_trivia: smallvec![],
        span: DqlSourceSpan {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
            file_path: None,
        },
    }
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> DqlToken<'static> {
    mock_token(DqlTokenKind::name_owned(name.to_string()))
}

pub fn mock_op_token(operation: &str) -> DqlToken<'static> {
    mock_token(DqlTokenKind::mutation_op_owned(operation.to_string()))
}

pub fn mock_payload_token(payload: &str) -> DqlToken<'static> {
    mock_token(DqlTokenKind::mutation_op_content_owned(payload.to_string()))
}

pub fn mock_open_token() -> DqlToken<'static> {
    mock_token(DqlTokenKind::CurlyBraceOpen)
}

pub fn mock_close_token() -> DqlToken<'static> {
    mock_token(DqlTokenKind::CurlyBraceClose)
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> DqlToken<'static> {
    mock_token(DqlTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
///
/// Uses `'static` lifetime since mock tokens use owned strings.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<DqlToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<DqlToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = DqlToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source`, panicking with the rendered error on failure.
pub(super) fn parse_ok(source: &str) -> ParsedMutation {
    match crate::parse_mutation(source) {
        Ok(parsed) => parsed,
        Err(err) => panic!("expected `{source}` to parse:\n{}", err.format_detailed(Some(source))),
    }
}

/// Parses `source`, panicking if it succeeds.
pub(super) fn parse_err(source: &str) -> DqlParseError {
    match crate::parse_mutation(source) {
        Ok(parsed) => panic!("expected `{source}` to fail, got {parsed:?}"),
        Err(err) => err,
    }
}

/// Parses an upsert block and returns its query result.
pub(super) fn parse_upsert_query(source: &str) -> QueryResult {
    parse_ok(source)
        .query
        .expect("upsert block should produce a query result")
}

/// Returns the names of the fields directly below `node`.
pub(super) fn field_names(node: &QueryNode) -> Vec<&str> {
    node.fields().map(|field| field.attribute.as_str()).collect()
}
