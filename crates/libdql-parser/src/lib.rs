//! A parser for DQL mutation blocks and upsert blocks.
//!
//! A mutation is either a bare block of operations:
//!
//! ```text
//! {
//!   set { _:alice <name> "Alice" . }
//!   delete { <0x1> <name> * . }
//! }
//! ```
//!
//! or an upsert block bundling query sections, mutation sections and
//! fragment definitions in any order:
//!
//! ```text
//! upsert {
//!   query { q(func: eq(email, "a@b.c")) { v as uid ...person } }
//!   fragment person { name }
//!   mutation { set { uid(v) <name> "Alice" . } }
//! }
//! ```
//!
//! Operation payloads are kept as raw bytes and never interpreted. Query
//! sections are parsed, fragment spreads are inlined and the result is
//! validated before [`parse_mutation()`] returns.
//!
//! ```rust
//! let parsed = libdql_parser::parse_mutation(
//!     "upsert { query { q(func: has(email)) { v as uid } } \
//!      mutation { set { uid(v) <seen> \"true\" . } } }",
//! )
//! .unwrap();
//! assert_eq!(parsed.query.unwrap().roots[0].attribute, "q");
//! assert!(parsed.mutation.unwrap().set_nquads.is_some());
//! ```

pub mod ast;
mod delimiter_context;
mod dql_error_note;
mod dql_error_note_kind;
mod dql_parse_error;
mod dql_parse_error_kind;
mod dql_parser;
mod dql_parser_options;
mod dql_source_span;
mod dql_string_parsing_error;
mod dql_token_stream;
mod fragment_resolver;
mod parsed_mutation;
mod query_parser;
mod result_validator;
mod source_position;
pub mod token;
pub mod token_source;

pub use delimiter_context::DelimiterContext;
pub use dql_error_note::DqlErrorNote;
pub use dql_error_note::DqlErrorNotes;
pub use dql_error_note_kind::DqlErrorNoteKind;
pub use dql_parse_error::DqlParseError;
pub use dql_parse_error_kind::DqlErrorCategory;
pub use dql_parse_error_kind::DqlParseErrorKind;
pub use dql_parser::DqlParser;
pub use dql_parser_options::DqlParserOptions;
pub use dql_source_span::DqlSourceSpan;
pub use dql_string_parsing_error::DqlStringParsingError;
pub use dql_token_stream::DqlTokenStream;
pub use fragment_resolver::resolve_fragments;
pub use fragment_resolver::FragmentTable;
pub use parsed_mutation::ParsedMutation;
pub use result_validator::validate_result;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use token_source::tokenize;
pub use token_source::validate_tokens;

use crate::token::DqlToken;
use crate::token_source::StrDqlTokenSource;
use std::path::Path;

/// Parses a mutation or upsert block with default options.
pub fn parse_mutation(text: &str) -> Result<ParsedMutation, DqlParseError> {
    parse_mutation_with_options(text, &DqlParserOptions::default())
}

/// Parses a mutation or upsert block.
///
/// The whole input is lexed and checked for lexer errors before parsing
/// starts, so a lexer error anywhere in the input is reported even if a
/// parse error would occur earlier.
pub fn parse_mutation_with_options(
    text: &str,
    options: &DqlParserOptions,
) -> Result<ParsedMutation, DqlParseError> {
    check_input_size(text, options)?;
    parse_tokens(tokenize(text), options)
}

/// Like [`parse_mutation_with_options()`], but error spans carry
/// `file_path`.
pub fn parse_mutation_with_file_path(
    text: &str,
    file_path: &Path,
    options: &DqlParserOptions,
) -> Result<ParsedMutation, DqlParseError> {
    check_input_size(text, options)?;
    parse_tokens(
        StrDqlTokenSource::with_file_path(text, file_path).collect(),
        options,
    )
}

fn parse_tokens(
    tokens: Vec<DqlToken<'_>>,
    options: &DqlParserOptions,
) -> Result<ParsedMutation, DqlParseError> {
    validate_tokens(&tokens)?;
    DqlParser::from_token_source_with_options(tokens.into_iter(), options.clone()).parse_mutation()
}

fn check_input_size(text: &str, options: &DqlParserOptions) -> Result<(), DqlParseError> {
    match options.input_byte_limit() {
        Some(limit) if text.len() > limit => {
            let origin = SourcePosition::new(0, 0, Some(0), 0);
            Err(DqlParseError::new(
                format!("input is {} bytes, which exceeds the limit of {limit} bytes", text.len()),
                DqlSourceSpan::new(origin.clone(), origin),
                DqlParseErrorKind::InputTooLarge {
                    len: text.len(),
                    limit,
                },
            ))
        },
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
