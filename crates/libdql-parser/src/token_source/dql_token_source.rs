use crate::token::DqlToken;

/// Marker trait for [`DqlToken`] lexers (iterators that generate
/// [`DqlToken`]).
///
/// [`StrDqlTokenSource`](crate::token_source::StrDqlTokenSource) lexes
/// `&str` input. Any other iterator of tokens (a pre-lexed `Vec`, a mock
/// source in tests) can drive the parser just as well.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// Lookahead and peeking are handled by `DqlTokenStream`.
///
/// Lexers are responsible for:
/// - Skipping whitespace
/// - Accumulating trivia (comments, commas) and attaching it to the next
///   token
/// - Emitting [`DqlTokenKind::Error`](crate::token::DqlTokenKind::Error) for
///   lexer errors
/// - Emitting a final token with
///   [`DqlTokenKind::Eof`](crate::token::DqlTokenKind::Eof) carrying any
///   trailing trivia
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from.
/// For string-based lexers this enables zero-copy lexing where token values
/// borrow directly from the input. Sources that must allocate strings use
/// `'static`.
pub trait DqlTokenSource<'src>: Iterator<Item = DqlToken<'src>> {}

impl<'src, T> DqlTokenSource<'src> for T where T: Iterator<Item = DqlToken<'src>> {}
