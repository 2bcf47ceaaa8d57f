//! A [`DqlTokenSource`](crate::token_source::DqlTokenSource) that lexes from
//! a `&str` input.
//!
//! DQL mutation text is block structured and the meaning of a word depends on
//! the block it appears in: `query` is a section keyword directly inside an
//! `upsert { ... }` block but an ordinary predicate name inside a selection
//! set, and the body of `set { ... }` is an opaque payload rather than a
//! sequence of tokens. The lexer therefore keeps a stack of open block
//! contexts and lexes each character according to the innermost one.
//!
//! # Features
//!
//! - **Zero-copy lexing**: Token values borrow from source text
//! - **Dual column tracking**: Reports both UTF-8 character positions and
//!   UTF-16 code unit positions
//! - **Comment preservation**: `#` comments are trivia inside selection
//!   blocks and `Text` tokens inside mutation blocks
//! - **Error tokens**: Invalid input emits `Error` tokens and lexing
//!   continues
//!
//! # Usage
//!
//! ```rust
//! use libdql_parser::token::DqlTokenKind;
//! use libdql_parser::token_source::StrDqlTokenSource;
//!
//! let kinds: Vec<_> = StrDqlTokenSource::new("{ set { <_:a> <name> \"x\" . } }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert!(matches!(&kinds[1], DqlTokenKind::MutationOp(op) if op == "set"));
//! assert!(matches!(
//!     &kinds[3],
//!     DqlTokenKind::MutationOpContent(payload) if payload == "<_:a> <name> \"x\" .",
//! ));
//! ```

use crate::smallvec;
use crate::token::DqlToken;
use crate::token::DqlTokenKind;
use crate::token::DqlTriviaToken;
use crate::token::DqlTriviaTokenVec;
use crate::DqlErrorNote;
use crate::DqlSourceSpan;
use crate::SmallVec;
use crate::SourcePosition;
use std::borrow::Cow;
use std::path::Path;

/// The kind of block a `{` opened, as far as the lexer is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockContext {
    /// `upsert { ... }`
    Upsert,
    /// `{ ... }` at the top level or `mutation { ... }` inside an upsert.
    Mutation,
    /// `set { ... }`, `delete { ... }`, etc. The payload has already been
    /// lexed when this context is on top of the stack.
    Operation,
    /// `query { ... }`, `fragment f { ... }` and every nested selection set.
    Selection,
}

/// What the next `{` opens, based on the keyword(s) preceding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingBlock {
    None,
    Upsert,
    Query,
    Mutation,
    Fragment,
    Operation,
}

/// A [`DqlTokenSource`](crate::token_source::DqlTokenSource) that lexes from
/// a `&str` input.
///
/// See module documentation for details.
pub struct StrDqlTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r` (so a following `\n` does not
    /// start another line).
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: DqlTriviaTokenVec<'src>,

    /// Stack of currently open blocks, innermost last.
    block_stack: SmallVec<[BlockContext; 8]>,

    /// What the next `{` opens.
    pending_block: PendingBlock,

    /// Set right after an operation's `{`: the next token is its payload.
    /// Holds the span of that `{` for error notes.
    payload_open_span: Option<DqlSourceSpan>,

    /// Whether a top-level block has already been closed. Words after it are
    /// lexed as plain names so the parser can report them as trailing
    /// content.
    closed_top_level_block: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,

    /// Optional file path for error messages and spans.
    file_path: Option<&'src Path>,
}

impl<'src> StrDqlTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            block_stack: SmallVec::new(),
            pending_block: PendingBlock::None,
            payload_open_span: None,
            closed_top_level_block: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `byte_len` bytes known to contain no line terminators.
    fn consume_within_line(&mut self, byte_len: usize) {
        let segment = &self.remaining()[..byte_len];
        for ch in segment.chars() {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
        }
        if byte_len > 0 {
            self.last_char_was_cr = false;
        }
        self.curr_byte_offset += byte_len;
    }

    /// Creates a `DqlSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> DqlSourceSpan {
        let end = self.curr_position();
        if let Some(path) = self.file_path {
            DqlSourceSpan::with_file(start, end, path.to_path_buf())
        } else {
            DqlSourceSpan::new(start, end)
        }
    }

    /// Creates a token with the accumulated trivia.
    fn make_token(
        &mut self,
        kind: DqlTokenKind<'src>,
        span: DqlSourceSpan,
    ) -> DqlToken<'src> {
        DqlToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    /// Consumes a single-character punctuator and returns its token.
    fn punctuator(
        &mut self,
        kind: DqlTokenKind<'src>,
        start: SourcePosition,
    ) -> DqlToken<'src> {
        self.consume();
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    fn innermost_block(&self) -> Option<BlockContext> {
        self.block_stack.last().copied()
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping whitespace and collecting trivia.
    fn next_token(&mut self) -> DqlToken<'src> {
        if let Some(open_span) = self.payload_open_span.take() {
            return self.lex_operation_payload(open_span);
        }

        loop {
            self.skip_whitespace();

            let start = self.curr_position();

            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    return self.make_token(DqlTokenKind::Eof, span);
                },

                Some('#') => {
                    if matches!(
                        self.innermost_block(),
                        Some(BlockContext::Mutation | BlockContext::Operation),
                    ) {
                        return self.lex_text_comment(start);
                    }
                    self.lex_comment(start);
                    continue;
                },

                Some(',') => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(DqlTriviaToken::Comma { span });
                    continue;
                },

                Some('{') => return self.lex_block_open(start),
                Some('}') => return self.lex_block_close(start),

                Some('@') => return self.punctuator(DqlTokenKind::At, start),
                Some(':') => return self.punctuator(DqlTokenKind::Colon, start),
                Some('$') => return self.punctuator(DqlTokenKind::Dollar, start),
                Some('(') => return self.punctuator(DqlTokenKind::ParenOpen, start),
                Some(')') => return self.punctuator(DqlTokenKind::ParenClose, start),
                Some('[') => {
                    return self.punctuator(DqlTokenKind::SquareBracketOpen, start);
                },
                Some(']') => {
                    return self.punctuator(DqlTokenKind::SquareBracketClose, start);
                },

                Some('.') => return self.lex_dots(start),
                Some('"') => return self.lex_string(start),
                Some('<') => return self.lex_iri(start),

                Some(c) if is_name_start(c) => return self.lex_word(start),

                Some(c) if c == '-' || c.is_ascii_digit() => {
                    return self.lex_number(start);
                },

                Some(_) => return self.lex_invalid_character(start),
            }
        }
    }

    // =========================================================================
    // Block structure
    // =========================================================================

    /// Lexes `{`, opening whatever block the preceding keyword announced.
    fn lex_block_open(&mut self, start: SourcePosition) -> DqlToken<'src> {
        self.consume();
        let span = self.make_span(start);

        let context = match self.pending_block {
            PendingBlock::Upsert => BlockContext::Upsert,
            PendingBlock::Mutation => BlockContext::Mutation,
            PendingBlock::Query | PendingBlock::Fragment => BlockContext::Selection,
            PendingBlock::Operation => {
                self.payload_open_span = Some(span.clone());
                BlockContext::Operation
            },
            PendingBlock::None => {
                if self.block_stack.is_empty() && !self.closed_top_level_block {
                    BlockContext::Mutation
                } else {
                    BlockContext::Selection
                }
            },
        };
        self.block_stack.push(context);
        self.pending_block = PendingBlock::None;

        self.make_token(DqlTokenKind::CurlyBraceOpen, span)
    }

    /// Lexes `}`, closing the innermost block (if any).
    ///
    /// A `}` with no open block is still emitted as a token; the parser
    /// reports it in context.
    fn lex_block_close(&mut self, start: SourcePosition) -> DqlToken<'src> {
        self.consume();
        let span = self.make_span(start);

        if self.block_stack.pop().is_some() && self.block_stack.is_empty() {
            self.closed_top_level_block = true;
        }
        self.pending_block = PendingBlock::None;

        self.make_token(DqlTokenKind::CurlyBraceClose, span)
    }

    /// Lexes the raw payload of an operation block, up to (not including)
    /// the `}` that balances the operation's `{`.
    ///
    /// Braces inside the payload must balance; braces inside double-quoted
    /// strings are ignored. The payload is emitted even when empty.
    fn lex_operation_payload(&mut self, open_span: DqlSourceSpan) -> DqlToken<'src> {
        let start = self.curr_position();
        let content_start = self.curr_byte_offset;
        let mut depth = 0usize;
        let mut in_string = false;

        loop {
            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    let kind = DqlTokenKind::Error {
                        message: "Unterminated operation block".to_string(),
                        error_notes: smallvec![
                            DqlErrorNote::general_with_span(
                                "operation block opened here",
                                open_span,
                            ),
                            DqlErrorNote::help("Add a closing `}`"),
                        ],
                    };
                    return self.make_token(kind, span);
                },
                Some('\\') if in_string => {
                    self.consume();
                    self.consume();
                },
                Some('"') => {
                    in_string = !in_string;
                    self.consume();
                },
                Some('{') if !in_string => {
                    depth += 1;
                    self.consume();
                },
                Some('}') if !in_string => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.consume();
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let span = self.make_span(start);
        let content = self.source[content_start..self.curr_byte_offset].trim();
        self.make_token(
            DqlTokenKind::MutationOpContent(Cow::Borrowed(content)),
            span,
        )
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips whitespace characters (space, tab, line terminators, BOM).
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Consumes a `#` comment through the end of the line and returns the
    /// comment text (excluding the `#`).
    fn consume_comment(&mut self) -> &'src str {
        self.consume();
        let content_start = self.curr_byte_offset;
        let rest = self.remaining().as_bytes();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.consume_within_line(len);
        &self.source[content_start..content_start + len]
    }

    /// Lexes a comment and adds it to pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        let content = self.consume_comment();
        let span = self.make_span(start);
        self.pending_trivia.push(DqlTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    /// Lexes a comment inside a mutation block as a `Text` token.
    fn lex_text_comment(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let start_offset = self.curr_byte_offset;
        self.consume_comment();
        let text = &self.source[start_offset..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(DqlTokenKind::Text(Cow::Borrowed(text)), span)
    }

    // =========================================================================
    // Words
    // =========================================================================

    /// Lexes a word, classifying it by the innermost open block.
    fn lex_word(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let word_start = self.curr_byte_offset;
        self.consume();
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }
        let word = &self.source[word_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let kind = match self.innermost_block() {
            None if self.closed_top_level_block => DqlTokenKind::name_borrowed(word),
            None => match word {
                "upsert" => {
                    self.pending_block = PendingBlock::Upsert;
                    DqlTokenKind::UpsertBlock
                },
                _ => DqlTokenKind::Error {
                    message: format!("Invalid block: [{word}]"),
                    error_notes: smallvec![DqlErrorNote::help(
                        "A mutation must be a `{ ... }` block or an \
                         `upsert { ... }` block"
                    )],
                },
            },
            Some(BlockContext::Upsert) if self.pending_block == PendingBlock::Fragment => {
                DqlTokenKind::name_borrowed(word)
            },
            Some(BlockContext::Upsert) => match word {
                "query" => {
                    self.pending_block = PendingBlock::Query;
                    DqlTokenKind::UpsertSection(Cow::Borrowed(word))
                },
                "mutation" => {
                    self.pending_block = PendingBlock::Mutation;
                    DqlTokenKind::UpsertSection(Cow::Borrowed(word))
                },
                "fragment" => {
                    self.pending_block = PendingBlock::Fragment;
                    DqlTokenKind::Definition(Cow::Borrowed(word))
                },
                _ => DqlTokenKind::name_borrowed(word),
            },
            Some(BlockContext::Mutation) => match word {
                "set" | "add" | "delete" | "remove" | "schema" | "dropall" => {
                    self.pending_block = PendingBlock::Operation;
                    DqlTokenKind::MutationOp(Cow::Borrowed(word))
                },
                _ => DqlTokenKind::name_borrowed(word),
            },
            Some(BlockContext::Operation | BlockContext::Selection) => {
                DqlTokenKind::name_borrowed(word)
            },
        };

        self.make_token(kind, span)
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// Lexes `...` (a fragment spread) or reports stray dots.
    fn lex_dots(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let rest = self.remaining();
        if rest.starts_with("...") {
            self.consume_within_line(3);
            let span = self.make_span(start);
            return self.make_token(DqlTokenKind::Ellipsis, span);
        }

        let kind = if rest.starts_with("..") {
            self.consume_within_line(2);
            DqlTokenKind::Error {
                message: "Unexpected `..` (use `...` for fragment spreads)".to_string(),
                error_notes: smallvec![DqlErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            }
        } else {
            self.consume_within_line(1);
            DqlTokenKind::Error {
                message: "Unexpected `.`".to_string(),
                error_notes: smallvec![],
            }
        };
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles an optional `-`, an integer part, an optional `.digits`
    /// fraction and an optional `[eE][+-]?digits` exponent.
    fn lex_number(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            let span = self.make_span(start);
            let kind = DqlTokenKind::Error {
                message: "Unexpected `-`".to_string(),
                error_notes: smallvec![],
            };
            return self.make_token(kind, span);
        }

        // Hexadecimal uids: `0x1a2b`.
        if self.remaining().starts_with("0x") || self.remaining().starts_with("0X") {
            self.consume_within_line(2);
            while let Some(ch) = self.peek_char() {
                if !ch.is_ascii_hexdigit() {
                    break;
                }
                self.consume();
            }
            let raw = &self.source[num_start..self.curr_byte_offset];
            let span = self.make_span(start);
            return self.make_token(DqlTokenKind::IntValue(Cow::Borrowed(raw)), span);
        }

        self.consume_digits();

        if self.peek_char() == Some('.')
            && let Some(ch) = self.peek_char_nth(1)
            && ch.is_ascii_digit()
        {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E')
        {
            is_float = true;
            self.consume();
            if let Some(ch) = self.peek_char()
                && (ch == '+' || ch == '-')
            {
                self.consume();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                let span = self.make_span(start);
                let kind = DqlTokenKind::Error {
                    message: format!(
                        "Invalid number `{}`: exponent must have at least one digit",
                        &self.source[num_start..self.curr_byte_offset],
                    ),
                    error_notes: smallvec![],
                };
                return self.make_token(kind, span);
            }
            self.consume_digits();
        }

        let raw = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            DqlTokenKind::FloatValue(Cow::Borrowed(raw))
        } else {
            DqlTokenKind::IntValue(Cow::Borrowed(raw))
        };
        self.make_token(kind, span)
    }

    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume();
        }
    }

    // =========================================================================
    // Strings and IRIs
    // =========================================================================

    /// Lexes a double-quoted string literal.
    fn lex_string(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let str_start = self.curr_byte_offset;
        self.consume();

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    let span = self.make_span(start.clone());
                    let kind = DqlTokenKind::Error {
                        message: "Unterminated string literal".to_string(),
                        error_notes: smallvec![
                            DqlErrorNote::general_with_span(
                                "String started here",
                                self.make_span(start),
                            ),
                            DqlErrorNote::help("Add closing `\"`"),
                        ],
                    };
                    return self.make_token(kind, span);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some() {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let raw = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(DqlTokenKind::StringValue(Cow::Borrowed(raw)), span)
    }

    /// Lexes an IRI predicate reference: `<name>`.
    fn lex_iri(&mut self, start: SourcePosition) -> DqlToken<'src> {
        self.consume();
        let iri_start = self.curr_byte_offset;
        let rest = self.remaining().as_bytes();

        match memchr::memchr3(b'>', b'\n', b'\r', rest) {
            Some(len) if rest[len] == b'>' => {
                self.consume_within_line(len);
                let iri = &self.source[iri_start..iri_start + len];
                self.consume();
                let span = self.make_span(start);
                self.make_token(DqlTokenKind::Iri(Cow::Borrowed(iri)), span)
            },
            found => {
                self.consume_within_line(found.unwrap_or(rest.len()));
                let span = self.make_span(start);
                let kind = DqlTokenKind::Error {
                    message: "Unterminated IRI: missing closing `>`".to_string(),
                    error_notes: smallvec![],
                };
                self.make_token(kind, span)
            },
        }
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    /// Lexes an invalid character, producing an error token.
    fn lex_invalid_character(&mut self, start: SourcePosition) -> DqlToken<'src> {
        let description = self
            .consume()
            .map(describe_char)
            .unwrap_or_default();
        let span = self.make_span(start);

        let kind = DqlTokenKind::Error {
            message: format!("Unexpected character {description}"),
            error_notes: smallvec![],
        };

        self.make_token(kind, span)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrDqlTokenSource<'src> {
    type Item = DqlToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if matches!(token.kind, DqlTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a name. `~` starts reverse-edge
/// predicates (`~friend`).
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch == '~' || ch.is_alphabetic()
}

/// Returns `true` if `ch` can continue a name. Dots appear in namespaced
/// predicates (`dgraph.type`).
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch == '.' || ch.is_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks.
/// For invisible/control characters, includes the Unicode code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch, ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch, ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Returns the Unicode name for commonly pasted invisible characters.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        _ => None,
    }
}
