use crate::token::DqlTokenKind;
use crate::token::DqlTriviaToken;
use crate::DqlSourceSpan;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type DqlTriviaTokenVec<'src> = SmallVec<[DqlTriviaToken<'src>; 2]>;

/// A DQL token with location (span) information and an ordered list of any
/// preceding trivia (comments, commas).
#[derive(Clone, Debug, PartialEq)]
pub struct DqlToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: DqlTokenKind<'src>,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: DqlTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: DqlSourceSpan,
}

impl<'src> DqlToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: DqlTokenKind<'src>, span: DqlSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }
}
