//! The DQL query grammar used inside `query { ... }` sections and fragment
//! definitions of an upsert block.
//!
//! ```text
//! block      := '{' root* '}'
//! root       := [Name 'as'] Name ['(' arguments ')'] directive* selections
//! selections := '{' selection* '}'
//! selection  := '...' Name
//!             | [Name ':'] [Name 'as'] Name ['(' arguments ')'] directive* [selections]
//! arguments  := argument*
//! argument   := Name ':' value | value
//! value      := Name ['(' arguments ')'] | Int | Float | String | Iri
//!             | '$' Name | '[' value* ']' | '(' value* ')'
//! directive  := '@' Name ['(' arguments ')']
//! ```
//!
//! Commas are trivia, so `eq(name, "x")` and `eq(name "x")` are equivalent.

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::QueryNode;
use crate::ast::QueryResult;
use crate::ast::Selection;
use crate::ast::Value;
use crate::token::DqlTokenKind;
use crate::token_source::DqlTokenSource;
use crate::DelimiterContext;
use crate::DqlParseError;
use crate::DqlParseErrorKind;
use crate::DqlParser;
use crate::DqlSourceSpan;

/// The keyword introducing a query variable definition (`v as friend`).
const VAR_KEYWORD: &str = "as";

impl<'src, TTokenSource: DqlTokenSource<'src>> DqlParser<'src, TTokenSource> {
    /// Parses a `{ root* }` query block and appends its roots to `result`.
    ///
    /// The cursor must be on the block's `{`; on success it is left on the
    /// matching `}`. `context` names the enclosing construct in error notes.
    pub fn parse_query(
        &mut self,
        result: &mut QueryResult,
        context: DelimiterContext,
    ) -> Result<(), DqlParseError> {
        let open_span = self.expect_block_open(context)?;

        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    format!("unclosed {}", context.description()),
                    open_span,
                    context,
                ));
            }

            match self.current_token()?.kind.clone() {
                DqlTokenKind::CurlyBraceClose => return Ok(()),
                DqlTokenKind::Name(_) => {
                    let root = self.parse_query_root()?;
                    result.roots.push(root);
                },
                _ => {
                    return Err(self.unexpected(
                        format!(
                            "expected a query block name, found `{}`",
                            self.current_display(),
                        ),
                        &["name", "}"],
                    ));
                },
            }
        }
    }

    /// Parses `fragment name { selection* }`.
    ///
    /// The cursor must be on the `fragment` keyword; on success it is left
    /// on the fragment's closing `}`.
    pub fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, DqlParseError> {
        let start_span = match &self.current_token()?.kind {
            DqlTokenKind::Definition(keyword) if keyword == "fragment" => self.current_span(),
            _ => {
                return Err(self.unexpected(
                    format!("expected `fragment`, found `{}`", self.current_display()),
                    &["fragment"],
                ));
            },
        };

        let (name, _) = self.expect_name("fragment name")?;
        if !self.advance()? {
            return Err(self.unexpected(
                format!("expected `{{` after fragment `{name}`, found end of input"),
                &["{"],
            ));
        }
        let selections = self.parse_selection_set(DelimiterContext::FragmentDefinition)?;

        Ok(FragmentDefinition {
            span: start_span.to(&self.current_span()),
            name,
            selections,
        })
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Parses a query root. The cursor is on its first name.
    fn parse_query_root(&mut self) -> Result<QueryNode, DqlParseError> {
        let (first, start_span) = self.current_name()?;

        let (var_name, attribute) = if self.peek_is(is_var_keyword) {
            self.advance()?;
            let (attribute, _) = self.expect_name("query block name")?;
            (Some(first), attribute)
        } else {
            (None, first)
        };

        let arguments = self.parse_optional_arguments()?;
        let directives = self.parse_directives()?;

        if !self.advance()? || !matches!(self.current_token()?.kind, DqlTokenKind::CurlyBraceOpen) {
            return Err(self.unexpected(
                format!(
                    "expected `{{` after query block `{attribute}`, found `{}`",
                    self.current_display(),
                ),
                &["{"],
            ));
        }
        let selections = self.parse_selection_set(DelimiterContext::SelectionSet)?;

        Ok(QueryNode {
            span: start_span.to(&self.current_span()),
            alias: None,
            var_name,
            attribute,
            arguments,
            directives,
            selections,
        })
    }

    /// Parses `{ selection* }`. The cursor is on the `{`; on success it is
    /// left on the matching `}`.
    fn parse_selection_set(
        &mut self,
        context: DelimiterContext,
    ) -> Result<Vec<Selection>, DqlParseError> {
        let open_span = self.expect_block_open(context)?;
        self.enter_nested(&open_span)?;

        let mut selections = Vec::new();
        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    format!("unclosed {}", context.description()),
                    open_span,
                    context,
                ));
            }

            match self.current_token()?.kind.clone() {
                DqlTokenKind::CurlyBraceClose => break,
                DqlTokenKind::Ellipsis => {
                    let spread_start = self.current_span();
                    let (name, name_span) = self.expect_name("fragment name after `...`")?;
                    selections.push(Selection::FragmentSpread(FragmentSpread {
                        span: spread_start.to(&name_span),
                        name,
                    }));
                },
                DqlTokenKind::Name(_) => {
                    selections.push(Selection::Field(self.parse_field()?));
                },
                _ => {
                    return Err(self.unexpected(
                        format!(
                            "expected a field or fragment spread, found `{}`",
                            self.current_display(),
                        ),
                        &["name", "...", "}"],
                    ));
                },
            }
        }

        self.exit_nested();
        Ok(selections)
    }

    /// Parses a field in a selection set. The cursor is on its first name.
    fn parse_field(&mut self) -> Result<QueryNode, DqlParseError> {
        let (first, start_span) = self.current_name()?;

        let (alias, name) = if self.peek_is(|kind| matches!(kind, DqlTokenKind::Colon)) {
            self.advance()?;
            let (name, _) = self.expect_name("field name after alias")?;
            (Some(first), name)
        } else {
            (None, first)
        };

        let (var_name, attribute) = if self.peek_is(is_var_keyword) {
            self.advance()?;
            let (attribute, _) = self.expect_name("field name after `as`")?;
            (Some(name), attribute)
        } else {
            (None, name)
        };

        let arguments = self.parse_optional_arguments()?;
        let directives = self.parse_directives()?;

        let selections = if self.peek_is(|kind| matches!(kind, DqlTokenKind::CurlyBraceOpen)) {
            self.advance()?;
            self.parse_selection_set(DelimiterContext::SelectionSet)?
        } else {
            Vec::new()
        };

        Ok(QueryNode {
            span: start_span.to(&self.current_span()),
            alias,
            var_name,
            attribute,
            arguments,
            directives,
            selections,
        })
    }

    /// Parses any `@name(arguments)` directives following the cursor.
    fn parse_directives(&mut self) -> Result<Vec<Directive>, DqlParseError> {
        let mut directives = Vec::new();
        while self.peek_is(|kind| matches!(kind, DqlTokenKind::At)) {
            self.advance()?;
            let start_span = self.current_span();
            let (name, _) = self.expect_name("directive name after `@`")?;
            let arguments = self.parse_optional_arguments()?;
            directives.push(Directive {
                span: start_span.to(&self.current_span()),
                name,
                arguments,
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Arguments and values
    // =========================================================================

    /// Parses `(arguments)` if the next token is `(`.
    fn parse_optional_arguments(&mut self) -> Result<Vec<Argument>, DqlParseError> {
        if !self.peek_is(|kind| matches!(kind, DqlTokenKind::ParenOpen)) {
            return Ok(Vec::new());
        }
        self.advance()?;
        self.parse_arguments()
    }

    /// Parses `( argument* )`. The cursor is on the `(`; on success it is
    /// left on the `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Argument>, DqlParseError> {
        let open_span = self.current_span();
        self.enter_nested(&open_span)?;

        let mut arguments = Vec::new();
        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    "unclosed `(` in arguments",
                    open_span,
                    DelimiterContext::Arguments,
                ));
            }
            if matches!(self.current_token()?.kind, DqlTokenKind::ParenClose) {
                break;
            }
            arguments.push(self.parse_argument()?);
        }

        self.exit_nested();
        Ok(arguments)
    }

    /// Parses a named or positional argument. The cursor is on its first
    /// token.
    fn parse_argument(&mut self) -> Result<Argument, DqlParseError> {
        let start_span = self.current_span();

        let name = match &self.current_token()?.kind {
            DqlTokenKind::Name(name) => Some(name.to_string()),
            _ => None,
        };
        if let Some(name) = name
            && self.peek_is(|kind| matches!(kind, DqlTokenKind::Colon))
        {
            self.advance()?;
            if !self.advance()? {
                return Err(self.unexpected(
                    format!("expected a value for argument `{name}`, found end of input"),
                    &["value"],
                ));
            }
            let value = self.parse_value()?;
            return Ok(Argument {
                span: start_span.to(value.span()),
                name: Some(name),
                value,
            });
        }

        let value = self.parse_value()?;
        Ok(Argument {
            span: value.span().clone(),
            name: None,
            value,
        })
    }

    /// Parses a value. The cursor is on its first token; on success it is
    /// left on its last token.
    fn parse_value(&mut self) -> Result<Value, DqlParseError> {
        let token = self.current_token()?.clone();
        let span = token.span.clone();

        match token.kind {
            DqlTokenKind::Name(name) => {
                if self.peek_is(|kind| matches!(kind, DqlTokenKind::ParenOpen)) {
                    self.advance()?;
                    let arguments = self.parse_arguments()?;
                    Ok(Value::Call {
                        span: span.to(&self.current_span()),
                        name: name.into_owned(),
                        arguments,
                    })
                } else {
                    Ok(Value::Name {
                        span,
                        name: name.into_owned(),
                    })
                }
            },
            DqlTokenKind::IntValue(raw) => Ok(Value::Int {
                span,
                raw: raw.into_owned(),
            }),
            DqlTokenKind::FloatValue(raw) => Ok(Value::Float {
                span,
                raw: raw.into_owned(),
            }),
            DqlTokenKind::StringValue(_) => {
                let parsed = token.kind.parse_string_value();
                match parsed {
                    Some(Ok(value)) => Ok(Value::String { span, value }),
                    Some(Err(err)) => Err(DqlParseError::new(
                        format!("invalid string literal: {err}"),
                        span,
                        DqlParseErrorKind::InvalidSyntax,
                    )),
                    None => Err(self.unexpected("expected a string value", &["string"])),
                }
            },
            DqlTokenKind::Iri(iri) => Ok(Value::Iri {
                span,
                iri: iri.into_owned(),
            }),
            DqlTokenKind::Dollar => {
                let (name, name_span) = self.expect_name("variable name after `$`")?;
                Ok(Value::Variable {
                    span: span.to(&name_span),
                    name,
                })
            },
            DqlTokenKind::SquareBracketOpen => {
                let values = self.parse_value_sequence(
                    span.clone(),
                    DelimiterContext::ListValue,
                    |kind| matches!(kind, DqlTokenKind::SquareBracketClose),
                )?;
                Ok(Value::List {
                    span: span.to(&self.current_span()),
                    values,
                })
            },
            DqlTokenKind::ParenOpen => {
                let values = self.parse_value_sequence(
                    span.clone(),
                    DelimiterContext::GroupValue,
                    |kind| matches!(kind, DqlTokenKind::ParenClose),
                )?;
                Ok(Value::Group {
                    span: span.to(&self.current_span()),
                    values,
                })
            },
            _ => Err(self.unexpected(
                format!("expected a value, found `{}`", self.current_display()),
                &["value"],
            )),
        }
    }

    /// Parses values up to the token matching `is_close`. The cursor is on
    /// the opening delimiter; on success it is left on the closing one.
    fn parse_value_sequence(
        &mut self,
        open_span: DqlSourceSpan,
        context: DelimiterContext,
        is_close: impl Fn(&DqlTokenKind<'src>) -> bool,
    ) -> Result<Vec<Value>, DqlParseError> {
        self.enter_nested(&open_span)?;

        let mut values = Vec::new();
        loop {
            if !self.advance()? {
                return Err(self.unclosed(
                    format!("unclosed {}", context.description()),
                    open_span,
                    context,
                ));
            }
            if is_close(&self.current_token()?.kind) {
                break;
            }
            values.push(self.parse_value()?);
        }

        self.exit_nested();
        Ok(values)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Returns the name under the cursor and its span.
    fn current_name(&self) -> Result<(String, DqlSourceSpan), DqlParseError> {
        let token = self.current_token()?;
        match &token.kind {
            DqlTokenKind::Name(name) => Ok((name.to_string(), token.span.clone())),
            _ => Err(self.unexpected(
                format!("expected a name, found `{}`", self.current_display()),
                &["name"],
            )),
        }
    }

    /// Advances and requires the new token to be a name.
    fn expect_name(&mut self, what: &str) -> Result<(String, DqlSourceSpan), DqlParseError> {
        let advanced = self.advance()?;
        match self.token_stream.current() {
            Some(token) if advanced => match &token.kind {
                DqlTokenKind::Name(name) => Ok((name.to_string(), token.span.clone())),
                _ => Err(self.unexpected(
                    format!("expected {what}, found `{}`", self.current_display()),
                    &["name"],
                )),
            },
            _ => Err(self.unexpected(
                format!("expected {what}, found end of input"),
                &["name"],
            )),
        }
    }

    /// Enters one level of selection set or value nesting.
    fn enter_nested(&mut self, span: &DqlSourceSpan) -> Result<(), DqlParseError> {
        self.recursion_depth += 1;
        let limit = self.options.recursion_limit();
        if self.recursion_depth > limit {
            let mut error = DqlParseError::new(
                format!("nesting is deeper than the limit of {limit}"),
                span.clone(),
                DqlParseErrorKind::RecursionLimitExceeded { limit },
            );
            error.add_help("Flatten the query or raise `max_recursion_depth`");
            return Err(error);
        }
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}

fn is_var_keyword(kind: &DqlTokenKind<'_>) -> bool {
    matches!(kind, DqlTokenKind::Name(name) if name == VAR_KEYWORD)
}
