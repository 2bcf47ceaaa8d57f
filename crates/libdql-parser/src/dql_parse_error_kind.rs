/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable message lives in `DqlParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DqlParseErrorKind {
    /// The token source produced an `Error` token.
    ///
    /// The lexer's message and notes are preserved in the parent
    /// `DqlParseError`.
    ///
    /// # Example
    /// ```text
    /// query { me(func: eq(name, "unterminated)) { uid } }
    ///                           ^ unterminated string literal
    /// ```
    #[error("lexer error")]
    LexerError,

    /// The input is larger than `DqlParserOptions::max_input_bytes`.
    #[error("input too large: {len} bytes (limit {limit})")]
    InputTooLarge {
        len: usize,
        limit: usize,
    },

    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// upsert { delete { ... } }
    ///          ^^^^^^ expected `query`, `mutation` or `fragment`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `["{"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// A block was opened but the input ended before its closing delimiter.
    ///
    /// # Example
    /// ```text
    /// upsert {
    /// # EOF here, missing `}`
    /// ```
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (always `"{"` for block constructs).
        delimiter: String,
    },

    /// A delimiter was opened where one is already open and only one is
    /// permitted.
    ///
    /// # Example
    /// ```text
    /// { set { { <_:a> <name> "x" . } } }
    ///         ^ too many opening delimiters in operation block
    /// ```
    #[error("excess delimiter: `{delimiter}`")]
    ExcessDelimiter {
        delimiter: String,
    },

    /// A mutation operation that cannot be submitted through this entry
    /// point (`schema`, `dropall`).
    #[error("unsupported operation: `{operation}`")]
    UnsupportedOperation {
        operation: String,
    },

    /// Tokens remain after the top-level block closed.
    #[error("trailing content: `{found}`")]
    TrailingContent {
        found: String,
    },

    /// Selection sets or values nested deeper than
    /// `DqlParserOptions::max_recursion_depth`.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded {
        limit: usize,
    },

    /// A fragment spread names a fragment that was never defined.
    #[error("undefined fragment: `{name}`")]
    UndefinedFragment {
        name: String,
    },

    /// A fragment spreads itself, directly or through other fragments.
    #[error("fragment cycle: {}", cycle_path.join(" -> "))]
    FragmentCycle {
        cycle_path: Vec<String>,
    },

    /// The assembled query result violates a result-level rule.
    #[error("invalid query result")]
    InvalidResult,

    /// Invalid syntax that doesn't fit other categories (including
    /// token-source invariant violations).
    #[error("invalid syntax")]
    InvalidSyntax,
}

impl DqlParseErrorKind {
    /// Returns the broad category this kind belongs to.
    pub fn category(&self) -> DqlErrorCategory {
        match self {
            DqlParseErrorKind::LexerError
            | DqlParseErrorKind::InputTooLarge { .. } => DqlErrorCategory::Lexical,

            DqlParseErrorKind::UnexpectedToken { .. }
            | DqlParseErrorKind::RecursionLimitExceeded { .. }
            | DqlParseErrorKind::InvalidSyntax => DqlErrorCategory::Syntax,

            DqlParseErrorKind::UnclosedDelimiter { .. }
            | DqlParseErrorKind::ExcessDelimiter { .. } => DqlErrorCategory::Structural,

            DqlParseErrorKind::UnsupportedOperation { .. } => {
                DqlErrorCategory::UnsupportedOperation
            },

            DqlParseErrorKind::TrailingContent { .. } => DqlErrorCategory::TrailingContent,

            DqlParseErrorKind::UndefinedFragment { .. }
            | DqlParseErrorKind::FragmentCycle { .. }
            | DqlParseErrorKind::InvalidResult => DqlErrorCategory::Semantic,
        }
    }
}

/// Broad error categories, one per failure mode of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DqlErrorCategory {
    /// Malformed token stream.
    Lexical,
    /// Token kind or value not valid in the current parse state.
    Syntax,
    /// Delimiter imbalance: excess openings or an unclosed block.
    Structural,
    /// `schema` / `dropall` operations.
    UnsupportedOperation,
    /// Tokens after the top-level construct.
    TrailingContent,
    /// Fragment resolution or result validation failures.
    Semantic,
}

impl DqlErrorCategory {
    /// Short lowercase label, used in diagnostic headers
    /// (`error[structural]: ...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DqlErrorCategory::Lexical => "lexical",
            DqlErrorCategory::Syntax => "syntax",
            DqlErrorCategory::Structural => "structural",
            DqlErrorCategory::UnsupportedOperation => "unsupported-operation",
            DqlErrorCategory::TrailingContent => "trailing-content",
            DqlErrorCategory::Semantic => "semantic",
        }
    }
}
