use crate::DqlErrorNotes;
use crate::DqlStringParsingError;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a DQL token.
///
/// Block keywords (`upsert`, `query`, `mutation`, `fragment`, `set`, ...) are
/// lexed into dedicated kinds only in the block context where they carry
/// meaning; elsewhere the same words are plain `Name`s.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrDqlTokenSource` borrows
/// string slices directly from the source text using `Cow::Borrowed`. Tokens
/// built by hand (tests, synthetic sources) use `Cow::Owned`.
#[derive(Clone, Debug, PartialEq)]
pub enum DqlTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Block structure
    // =========================================================================
    /// The `upsert` keyword introducing a top-level upsert block.
    UpsertBlock,

    /// A section keyword inside an upsert block (`query` or `mutation`).
    UpsertSection(Cow<'src, str>),

    /// A definition keyword inside an upsert block (`fragment`).
    Definition(Cow<'src, str>),

    /// An operation keyword inside a mutation block (`set`, `add`, `delete`,
    /// `remove`, `schema`, `dropall`).
    MutationOp(Cow<'src, str>),

    /// The raw payload between an operation's delimiters, trimmed of
    /// surrounding whitespace. Never interpreted by the parser.
    MutationOpContent(Cow<'src, str>),

    /// Free text that carries no structure (comments inside mutation
    /// blocks). Parsers skip it.
    Text(Cow<'src, str>),

    // =========================================================================
    // Query literals (raw source text only)
    // =========================================================================
    /// A name/identifier, including predicate names like `dgraph.type`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative
    /// sign. Hexadecimal uids (`0x1f`) are integers too.
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign.
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes.
    ///
    /// Use `parse_string_value()` to process escape sequences.
    StringValue(Cow<'src, str>),

    /// An IRI-style predicate reference without its angle brackets
    /// (`<friend.of>` is lexed as `Iri("friend.of")`).
    Iri(Cow<'src, str>),

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. The associated `DqlToken` may carry trailing trivia.
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error. Reported by `validate_tokens()` before parsing starts.
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: DqlErrorNotes,
    },
}

impl<'src> DqlTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        DqlTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        DqlTokenKind::Name(Cow::Owned(s))
    }

    /// Create a `MutationOp` token from an owned `String`.
    #[inline]
    pub fn mutation_op_owned(s: String) -> Self {
        DqlTokenKind::MutationOp(Cow::Owned(s))
    }

    /// Create a `MutationOpContent` token from an owned `String`.
    #[inline]
    pub fn mutation_op_content_owned(s: String) -> Self {
        DqlTokenKind::MutationOpContent(Cow::Owned(s))
    }

    /// Create an `UpsertSection` token from an owned `String`.
    #[inline]
    pub fn upsert_section_owned(s: String) -> Self {
        DqlTokenKind::UpsertSection(Cow::Owned(s))
    }

    /// Create a `Definition` token from an owned `String`.
    #[inline]
    pub fn definition_owned(s: String) -> Self {
        DqlTokenKind::Definition(Cow::Owned(s))
    }

    /// Create a `Text` token from an owned `String`.
    #[inline]
    pub fn text_owned(s: String) -> Self {
        DqlTokenKind::Text(Cow::Owned(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: DqlErrorNotes) -> Self {
        DqlTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            DqlTokenKind::At => Some("@"),
            DqlTokenKind::Colon => Some(":"),
            DqlTokenKind::CurlyBraceClose => Some("}"),
            DqlTokenKind::CurlyBraceOpen => Some("{"),
            DqlTokenKind::Dollar => Some("$"),
            DqlTokenKind::Ellipsis => Some("..."),
            DqlTokenKind::ParenClose => Some(")"),
            DqlTokenKind::ParenOpen => Some("("),
            DqlTokenKind::SquareBracketClose => Some("]"),
            DqlTokenKind::SquareBracketOpen => Some("["),

            DqlTokenKind::UpsertBlock
            | DqlTokenKind::UpsertSection(_)
            | DqlTokenKind::Definition(_)
            | DqlTokenKind::MutationOp(_)
            | DqlTokenKind::MutationOpContent(_)
            | DqlTokenKind::Text(_)
            | DqlTokenKind::Name(_)
            | DqlTokenKind::IntValue(_)
            | DqlTokenKind::FloatValue(_)
            | DqlTokenKind::StringValue(_)
            | DqlTokenKind::Iri(_)
            | DqlTokenKind::Eof
            | DqlTokenKind::Error { .. } => None,
        }
    }

    /// Returns the literal value of this token as it should be shown to a
    /// user in an error message.
    pub fn display_value(&self) -> Cow<'_, str> {
        if let Some(punctuator) = self.as_punctuator_str() {
            return Cow::Borrowed(punctuator);
        }
        match self {
            DqlTokenKind::UpsertBlock => Cow::Borrowed("upsert"),
            DqlTokenKind::UpsertSection(s)
            | DqlTokenKind::Definition(s)
            | DqlTokenKind::MutationOp(s)
            | DqlTokenKind::MutationOpContent(s)
            | DqlTokenKind::Text(s)
            | DqlTokenKind::Name(s)
            | DqlTokenKind::IntValue(s)
            | DqlTokenKind::FloatValue(s)
            | DqlTokenKind::StringValue(s) => Cow::Borrowed(s.as_ref()),
            DqlTokenKind::Iri(s) => Cow::Owned(format!("<{s}>")),
            DqlTokenKind::Eof => Cow::Borrowed("end of input"),
            DqlTokenKind::Error { message, .. } => Cow::Borrowed(message.as_str()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, DqlTokenKind::Error { .. })
    }

    /// Parse an `IntValue`'s raw text to `i64`, accepting `0x` hex.
    ///
    /// Returns `None` if this is not an `IntValue`.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            DqlTokenKind::IntValue(raw) => Some(parse_dql_int(raw)),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    ///
    /// Returns `None` if this is not a `FloatValue`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            DqlTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `StringValue`'s raw text to unescaped content.
    ///
    /// Processes `\n`, `\r`, `\t`, `\\`, `\"`, `\'` and `\uXXXX`.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, DqlStringParsingError>> {
        match self {
            DqlTokenKind::StringValue(raw) => Some(parse_dql_string(raw)),
            _ => None,
        }
    }
}

fn parse_dql_int(raw: &str) -> Result<i64, ParseIntError> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16)?,
        None => digits.parse::<i64>()?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a raw DQL string literal into its unescaped content.
fn parse_dql_string(raw: &str) -> Result<String, DqlStringParsingError> {
    if !raw.starts_with('"') || !raw.ends_with('"') || raw.len() < 2 {
        return Err(DqlStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => result.push(ch),
                    None => {
                        return Err(DqlStringParsingError::InvalidUnicodeEscape(format!(
                            "\\u{hex}"
                        )));
                    },
                }
            },
            Some(other) => {
                return Err(DqlStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(DqlStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}
