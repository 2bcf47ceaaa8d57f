//! Recursive descent parser for DQL mutation and upsert blocks.
//!
//! This module provides [`DqlParser`], a generic parser that works with any
//! token source implementing [`DqlTokenSource`]. The block-level rules live
//! here; the query grammar used inside `query { ... }` and
//! `fragment name { ... }` sections lives in `query_parser.rs`.
//!
//! # Architecture
//!
//! Every `parse_*` method is entered with the cursor on the first token of
//! its construct and returns with the cursor on the construct's last token
//! (normally its closing delimiter). Decisions are made from the current
//! token plus at most one token of lookahead; the cursor never moves
//! backwards.
//!
//! The first error aborts the parse. There is no recovery and no partial
//! result.

use crate::ast::Mutation;
use crate::ast::QueryResult;
use crate::fragment_resolver::resolve_fragments;
use crate::fragment_resolver::FragmentTable;
use crate::result_validator::validate_result;
use crate::smallvec;
use crate::token::DqlToken;
use crate::token::DqlTokenKind;
use crate::token_source::DqlTokenSource;
use crate::token_source::StrDqlTokenSource;
use crate::DelimiterContext;
use crate::DqlErrorNote;
use crate::DqlParseError;
use crate::DqlParseErrorKind;
use crate::DqlParserOptions;
use crate::DqlSourceSpan;
use crate::DqlTokenStream;
use crate::ParsedMutation;
use crate::SourcePosition;
use log::debug;
use log::trace;

/// Operation keywords accepted inside a mutation block.
const MUTATION_OPERATIONS: [&str; 6] = ["set", "add", "delete", "remove", "schema", "dropall"];

/// A recursive descent parser for DQL mutation and upsert blocks.
///
/// ```rust
/// use libdql_parser::DqlParser;
///
/// let parsed = DqlParser::new("{ set { <_:a> <name> \"Alice\" . } }")
///     .parse_mutation()
///     .unwrap();
/// let mutation = parsed.mutation.unwrap();
/// assert_eq!(mutation.set_nquads.as_deref(), Some(&b"<_:a> <name> \"Alice\" ."[..]));
/// assert!(parsed.query.is_none());
/// ```
pub struct DqlParser<'src, TTokenSource: DqlTokenSource<'src> = StrDqlTokenSource<'src>> {
    pub(crate) token_stream: DqlTokenStream<'src, TTokenSource>,
    pub(crate) options: DqlParserOptions,
    /// Current nesting depth of selection sets and values.
    pub(crate) recursion_depth: usize,
    /// Where the stream ended, for token sources that stop without `Eof`.
    pub(crate) exhausted_span: DqlSourceSpan,
}

impl<'src> DqlParser<'src, StrDqlTokenSource<'src>> {
    /// Creates a parser over `source` with default options.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrDqlTokenSource::new(source))
    }

    /// Creates a parser over `source` with the given options.
    pub fn with_options(source: &'src str, options: DqlParserOptions) -> Self {
        Self::from_token_source_with_options(StrDqlTokenSource::new(source), options)
    }
}

impl<'src, TTokenSource: DqlTokenSource<'src>> DqlParser<'src, TTokenSource> {
    /// Creates a parser over an arbitrary token source with default options.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self::from_token_source_with_options(token_source, DqlParserOptions::default())
    }

    /// Creates a parser over an arbitrary token source.
    pub fn from_token_source_with_options(
        token_source: TTokenSource,
        options: DqlParserOptions,
    ) -> Self {
        let origin = SourcePosition::new(0, 0, Some(0), 0);
        Self {
            token_stream: DqlTokenStream::new(token_source),
            options,
            recursion_depth: 0,
            exhausted_span: DqlSourceSpan::new(origin.clone(), origin),
        }
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Moves the cursor to the next token.
    ///
    /// Returns `Ok(false)` when the stream is exhausted or the cursor lands
    /// on `Eof`. A lexer `Error` token fails the parse.
    pub(crate) fn advance(&mut self) -> Result<bool, DqlParseError> {
        let previous = self.token_stream.take_current();
        if !self.token_stream.advance() {
            if let Some(previous) = previous {
                self.exhausted_span = previous.span.end_point();
            }
            return Ok(false);
        }
        match self.token_stream.current() {
            Some(DqlToken {
                kind: DqlTokenKind::Error { message, error_notes },
                span,
                ..
            }) => Err(DqlParseError::from_lexer_error(
                message.clone(),
                span.clone(),
                error_notes.clone(),
            )),
            Some(DqlToken { kind: DqlTokenKind::Eof, .. }) | None => Ok(false),
            Some(_) => Ok(true),
        }
    }

    /// Returns the token under the cursor.
    pub(crate) fn current_token(&self) -> Result<&DqlToken<'src>, DqlParseError> {
        self.token_stream.current().ok_or_else(|| {
            DqlParseError::new(
                "unexpected end of token stream",
                self.exhausted_span.clone(),
                DqlParseErrorKind::InvalidSyntax,
            )
        })
    }

    /// Returns a clone of the current token's span, or the end-of-input span.
    pub(crate) fn current_span(&self) -> DqlSourceSpan {
        self.token_stream
            .current()
            .map(|token| token.span.clone())
            .unwrap_or_else(|| self.exhausted_span.clone())
    }

    /// Returns the current token's value as shown in error messages.
    pub(crate) fn current_display(&self) -> String {
        self.token_stream
            .current_kind()
            .map(|kind| kind.display_value().into_owned())
            .unwrap_or_else(|| "end of input".to_string())
    }

    /// Returns `true` if the token after the cursor satisfies `predicate`.
    pub(crate) fn peek_is(&mut self, predicate: impl Fn(&DqlTokenKind<'src>) -> bool) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| predicate(&token.kind))
    }

    /// Builds an `UnexpectedToken` error at the current token.
    pub(crate) fn unexpected(
        &self,
        message: impl Into<String>,
        expected: &[&str],
    ) -> DqlParseError {
        DqlParseError::new(
            message,
            self.current_span(),
            DqlParseErrorKind::UnexpectedToken {
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found: self.current_display(),
            },
        )
    }

    /// Builds an `UnclosedDelimiter` error at the end of input with a note
    /// pointing at the opening delimiter.
    pub(crate) fn unclosed(
        &self,
        message: impl Into<String>,
        open_span: DqlSourceSpan,
        context: DelimiterContext,
    ) -> DqlParseError {
        let delimiter = context.open_delimiter();
        let mut error = DqlParseError::new(
            message,
            self.current_span(),
            DqlParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        error.add_note_with_span(
            format!("opening `{delimiter}` of {} here", context.description()),
            open_span,
        );
        error
    }

    /// Requires the cursor to be on `{` and returns its span.
    pub(crate) fn expect_block_open(
        &self,
        context: DelimiterContext,
    ) -> Result<DqlSourceSpan, DqlParseError> {
        match self.token_stream.current() {
            Some(DqlToken {
                kind: DqlTokenKind::CurlyBraceOpen,
                span,
                ..
            }) => Ok(span.clone()),
            _ => Err(self.unexpected(
                format!(
                    "expected `{{` at the start of {}, found `{}`",
                    context.description(),
                    self.current_display(),
                ),
                &["{"],
            )),
        }
    }

    // =========================================================================
    // Top-level dispatch
    // =========================================================================

    /// Parses a complete mutation: either a bare `{ ... }` mutation block or
    /// an `upsert { ... }` block, followed by nothing but the end of input.
    ///
    /// This does not run [`validate_tokens()`](crate::validate_tokens)
    /// first; a lexer error is reported when the cursor reaches it.
    pub fn parse_mutation(mut self) -> Result<ParsedMutation, DqlParseError> {
        if !self.advance()? {
            let mut error = DqlParseError::new(
                "invalid mutation: no block found",
                self.current_span(),
                DqlParseErrorKind::InvalidSyntax,
            );
            error.add_help("A mutation is a `{ ... }` block or an `upsert { ... }` block");
            return Err(error);
        }

        let first_kind = self.current_token()?.kind.clone();
        let parsed = match first_kind {
            DqlTokenKind::UpsertBlock => {
                debug!("parsing upsert block");
                let keyword_span = self.current_span();
                if !self.advance()? {
                    let mut error = DqlParseError::new(
                        "unclosed upsert block",
                        self.current_span(),
                        DqlParseErrorKind::UnclosedDelimiter {
                            delimiter: "{".to_string(),
                        },
                    );
                    error.add_note_with_span("upsert block starts here", keyword_span);
                    return Err(error);
                }
                let (query, mutation) = self.parse_upsert_block()?;
                ParsedMutation {
                    query: Some(query),
                    mutation,
                }
            },
            DqlTokenKind::CurlyBraceOpen => {
                debug!("parsing mutation block");
                ParsedMutation {
                    query: None,
                    mutation: Some(self.parse_mutation_block()?),
                }
            },
            _ => {
                return Err(self.unexpected(
                    format!("unexpected token `{}`", self.current_display()),
                    &["{", "upsert"],
                ));
            },
        };

        if self.advance()? {
            let found = self.current_display();
            let mut error = DqlParseError::new(
                format!("unexpected `{found}` after the end of the block"),
                self.current_span(),
                DqlParseErrorKind::TrailingContent { found },
            );
            error.add_help("A mutation must consist of a single block");
            return Err(error);
        }

        debug!(
            "parsed mutation (upsert: {}, has mutation: {})",
            parsed.is_upsert(),
            parsed.mutation.is_some(),
        );
        Ok(parsed)
    }

    // =========================================================================
    // Upsert block
    // =========================================================================

    /// Parses `{ ... }` after the `upsert` keyword.
    ///
    /// Query sections, mutation sections and fragment definitions may appear
    /// in any order and any number of times. Query roots accumulate; a later
    /// mutation section replaces an earlier one; a later fragment with the
    /// same name replaces an earlier one.
    fn parse_upsert_block(&mut self) -> Result<(QueryResult, Option<Mutation>), DqlParseError> {
        let open_span = self.expect_block_open(DelimiterContext::UpsertBlock)?;

        let mut result = QueryResult::new();
        let mut mutation: Option<Mutation> = None;
        let mut fragments = FragmentTable::new();

        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    "unclosed upsert block",
                    open_span,
                    DelimiterContext::UpsertBlock,
                ));
            }

            let kind = self.current_token()?.kind.clone();
            match kind {
                DqlTokenKind::CurlyBraceClose => {
                    if !result.is_empty() {
                        resolve_fragments(&mut result, &fragments)?;
                    }
                    validate_result(&result)?;
                    debug!(
                        "upsert block closed with {} query root(s) and {} fragment(s)",
                        result.len(),
                        fragments.len(),
                    );
                    return Ok((result, mutation));
                },

                DqlTokenKind::UpsertSection(section) => {
                    let section = section.to_string();
                    if !self.advance()? {
                        return Err(self.unclosed(
                            "unclosed upsert block",
                            open_span,
                            DelimiterContext::UpsertBlock,
                        ));
                    }
                    match section.as_str() {
                        "query" => {
                            trace!("parsing query section");
                            self.parse_query(&mut result, DelimiterContext::QueryBlock)?;
                        },
                        "mutation" => {
                            trace!("parsing mutation section");
                            if mutation.is_some() {
                                debug!("mutation section replaces an earlier one");
                            }
                            mutation = Some(self.parse_mutation_block()?);
                        },
                        other => {
                            return Err(DqlParseError::new(
                                format!("unknown upsert section `{other}`"),
                                self.current_span(),
                                DqlParseErrorKind::InvalidSyntax,
                            ));
                        },
                    }
                },

                DqlTokenKind::Definition(keyword) => {
                    if keyword != "fragment" {
                        return Err(DqlParseError::new(
                            format!("unknown definition keyword `{keyword}`"),
                            self.current_span(),
                            DqlParseErrorKind::InvalidSyntax,
                        ));
                    }
                    let fragment = self.parse_fragment_definition()?;
                    trace!("parsed fragment `{}`", fragment.name);
                    if fragments.contains_key(&fragment.name) {
                        debug!("fragment `{}` replaces an earlier definition", fragment.name);
                    }
                    fragments.insert(fragment.name.clone(), fragment);
                },

                _ => {
                    return Err(self.unexpected(
                        format!("unexpected token in upsert block `{}`", self.current_display()),
                        &["query", "mutation", "fragment", "}"],
                    ));
                },
            }
        }
    }

    // =========================================================================
    // Mutation block
    // =========================================================================

    /// Parses a `{ ... }` block of mutation operations.
    fn parse_mutation_block(&mut self) -> Result<Mutation, DqlParseError> {
        let open_span = self.expect_block_open(DelimiterContext::MutationBlock)?;
        let mut mutation = Mutation::default();

        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    "invalid mutation block: missing closing `}`",
                    open_span,
                    DelimiterContext::MutationBlock,
                ));
            }

            let token = self.current_token()?.clone();
            match token.kind {
                DqlTokenKind::Text(_) => continue,
                DqlTokenKind::CurlyBraceClose => return Ok(mutation),
                DqlTokenKind::MutationOp(operation) => {
                    trace!("parsing `{operation}` operation");
                    self.parse_operation(&operation, token.span, &mut mutation)?;
                },
                _ => {
                    let mut expected = MUTATION_OPERATIONS.to_vec();
                    expected.push("}");
                    return Err(self.unexpected(
                        format!(
                            "unexpected token in mutation block `{}`",
                            self.current_display(),
                        ),
                        &expected,
                    ));
                },
            }
        }
    }

    // =========================================================================
    // Operation content
    // =========================================================================

    /// Parses the `{ payload }` following an operation keyword and stores
    /// the payload in `mutation`.
    ///
    /// `schema` and `dropall` are rejected whether or not a payload is
    /// present.
    fn parse_operation(
        &mut self,
        operation: &str,
        operation_span: DqlSourceSpan,
        mutation: &mut Mutation,
    ) -> Result<(), DqlParseError> {
        let mut open_span: Option<DqlSourceSpan> = None;

        loop {
            if !self.advance()? {
                let note_span = open_span.unwrap_or(operation_span);
                return Err(self.unclosed(
                    format!("invalid operation formatting: `{operation}` block is not closed"),
                    note_span,
                    DelimiterContext::OperationBlock,
                ));
            }

            let token = self.current_token()?;
            match &token.kind {
                DqlTokenKind::Text(_) => continue,

                DqlTokenKind::CurlyBraceOpen => {
                    if let Some(first_open) = open_span {
                        let mut error = DqlParseError::new(
                            format!("too many opening delimiters in `{operation}` block"),
                            token.span.clone(),
                            DqlParseErrorKind::ExcessDelimiter {
                                delimiter: "{".to_string(),
                            },
                        );
                        error.add_note_with_span("first `{` here", first_open);
                        return Err(error);
                    }
                    open_span = Some(token.span.clone());
                },

                DqlTokenKind::MutationOpContent(payload) => {
                    if open_span.is_none() {
                        return Err(self.unexpected(
                            format!(
                                "operation syntax invalid: `{operation}` payload must be \
                                 enclosed in `{{ }}`",
                            ),
                            &["{"],
                        ));
                    }
                    match operation {
                        "set" | "add" => {
                            mutation.set_nquads = Some(payload.as_bytes().to_vec());
                        },
                        "delete" | "remove" => {
                            mutation.del_nquads = Some(payload.as_bytes().to_vec());
                        },
                        "schema" | "dropall" => {
                            return Err(unsupported_operation(operation, token.span.clone()));
                        },
                        _ => {
                            return Err(DqlParseError::new(
                                format!("invalid mutation operation `{operation}`"),
                                operation_span,
                                DqlParseErrorKind::InvalidSyntax,
                            ));
                        },
                    }
                },

                DqlTokenKind::CurlyBraceClose => {
                    if matches!(operation, "schema" | "dropall") {
                        return Err(unsupported_operation(operation, operation_span));
                    }
                    return Ok(());
                },

                _ => {
                    return Err(self.unexpected(
                        format!(
                            "unexpected token in `{operation}` block `{}`",
                            self.current_display(),
                        ),
                        &["{", "}"],
                    ));
                },
            }
        }
    }
}

fn unsupported_operation(operation: &str, span: DqlSourceSpan) -> DqlParseError {
    let message = match operation {
        "schema" => "altering the schema is not supported in a mutation block".to_string(),
        "dropall" => "dropping all data is not supported in a mutation block".to_string(),
        _ => format!("`{operation}` is not supported in a mutation block"),
    };
    DqlParseError::with_notes(
        message,
        span,
        DqlParseErrorKind::UnsupportedOperation {
            operation: operation.to_string(),
        },
        smallvec![DqlErrorNote::help(
            "Submit schema changes and drop-all requests separately from mutations"
        )],
    )
}
