//! Forward-only cursor over the [`DqlToken`]s of some [`DqlTokenSource`].

use std::collections::VecDeque;

use crate::token::DqlToken;
use crate::token::DqlTokenKind;
use crate::token_source::DqlTokenSource;

/// Forward-only cursor over the [`DqlToken`]s of some [`DqlTokenSource`].
///
/// The parser sees one token at a time: [`advance()`](Self::advance) moves
/// the cursor and [`current()`](Self::current) returns the token under it.
/// Tokens that have been advanced past are dropped and cannot be revisited.
/// [`peek()`](Self::peek) gives a single token of lookahead without moving
/// the cursor.
///
/// # Type Parameters
///
/// * `'src` - The lifetime of the source text that tokens are lexed from.
/// * `TTokenSource` - The underlying token source (any
///   `Iterator<Item = DqlToken>`).
pub struct DqlTokenStream<
    'src,
    TTokenSource: DqlTokenSource<'src>,
> {
    token_source: TTokenSource,
    /// The token under the cursor. `None` before the first `advance()` and
    /// after the stream is exhausted.
    current: Option<DqlToken<'src>>,
    /// Tokens pulled from the source by `peek()` but not yet advanced to.
    lookahead: VecDeque<DqlToken<'src>>,
    /// Number of successful `advance()` calls.
    num_advanced: usize,
}

impl<'src, TTokenSource: DqlTokenSource<'src>>
    DqlTokenStream<'src, TTokenSource>
{
    /// Creates a new token stream from a token source. The cursor starts
    /// before the first token.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            current: None,
            lookahead: VecDeque::with_capacity(1),
            num_advanced: 0,
        }
    }

    /// Moves the cursor to the next token.
    ///
    /// Returns `false` (and leaves no current token) once the stream is
    /// exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self
            .lookahead
            .pop_front()
            .or_else(|| self.token_source.next());
        if self.current.is_some() {
            self.num_advanced += 1;
        }
        self.current.is_some()
    }

    /// Returns the token under the cursor.
    #[inline]
    pub fn current(&self) -> Option<&DqlToken<'src>> {
        self.current.as_ref()
    }

    /// Returns the kind of the token under the cursor.
    #[inline]
    pub fn current_kind(&self) -> Option<&DqlTokenKind<'src>> {
        self.current.as_ref().map(|token| &token.kind)
    }

    /// Takes ownership of the token under the cursor, leaving the cursor
    /// without a current token until the next `advance()`.
    pub fn take_current(&mut self) -> Option<DqlToken<'src>> {
        self.current.take()
    }

    /// Peeks at the token after the cursor without advancing.
    pub fn peek(&mut self) -> Option<&DqlToken<'src>> {
        if self.lookahead.is_empty()
            && let Some(token) = self.token_source.next()
        {
            self.lookahead.push_back(token);
        }
        self.lookahead.front()
    }

    /// Returns `true` if the cursor is on an `Eof` token or past the end of
    /// the stream.
    pub fn is_at_end(&self) -> bool {
        match &self.current {
            None => true,
            Some(token) => matches!(token.kind, DqlTokenKind::Eof),
        }
    }

    /// Returns the number of tokens the cursor has moved onto so far.
    pub fn num_advanced(&self) -> usize {
        self.num_advanced
    }
}
