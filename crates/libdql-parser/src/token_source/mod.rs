//! Token source trait and implementations.

mod dql_token_source;
mod str_dql_token_source;

pub use dql_token_source::DqlTokenSource;
pub use str_dql_token_source::StrDqlTokenSource;

use crate::token::DqlToken;
use crate::token::DqlTokenKind;
use crate::DqlParseError;

/// Lexes `source` into a complete token stream, ending with `Eof`.
///
/// Lexer errors are not reported here; they appear as
/// [`DqlTokenKind::Error`] tokens in the returned stream. Use
/// [`validate_tokens()`] to surface the first one.
pub fn tokenize(source: &str) -> Vec<DqlToken<'_>> {
    StrDqlTokenSource::new(source).collect()
}

/// Returns the first lexer error in `tokens` as a
/// [`DqlParseErrorKind::LexerError`](crate::DqlParseErrorKind::LexerError),
/// preserving the lexer's message and notes.
pub fn validate_tokens(tokens: &[DqlToken<'_>]) -> Result<(), DqlParseError> {
    for token in tokens {
        if let DqlTokenKind::Error { message, error_notes } = &token.kind {
            return Err(DqlParseError::from_lexer_error(
                message.clone(),
                token.span.clone(),
                error_notes.clone(),
            ));
        }
    }
    Ok(())
}
