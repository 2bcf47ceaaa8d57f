use crate::DqlErrorNote;
use crate::DqlErrorNotes;
use crate::DqlParseErrorKind;
use crate::DqlSourceSpan;

/// A parse error with location information and contextual notes.
///
/// Parsing either fully succeeds or fails with exactly one of these.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct DqlParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `{` at the start of upsert block, found `query`",
    /// "unclosed upsert block"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unclosed block" errors: the position where closing was expected
    span: DqlSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: DqlParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: DqlErrorNotes,
}

impl DqlParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: DqlSourceSpan,
        kind: DqlParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: DqlErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: DqlSourceSpan,
        kind: DqlParseErrorKind,
        notes: DqlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Creates a parse error from a lexer error token, preserving the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: DqlSourceSpan,
        lexer_notes: DqlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: DqlParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &DqlSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &DqlParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &DqlErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(DqlErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: DqlSourceSpan) {
        self.notes
            .push(DqlErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(DqlErrorNote::help(message));
    }

    /// Renders this error as a multi-line diagnostic.
    ///
    /// The header names the error's [`DqlErrorCategory`]. With `source`
    /// available, the offending line is shown with the primary span
    /// underlined, and each located note shows its own line:
    ///
    /// ```text
    /// error[structural]: unclosed upsert block
    ///   --> upsert.dql:1:9
    ///    |
    ///  1 | upsert {
    ///    |         ^
    ///    = note: upsert block starts here
    ///  1 | upsert {
    ///    | -
    /// ```
    ///
    /// Line breaks follow the lexer: `\n`, `\r\n` and a lone `\r` each end
    /// a line.
    ///
    /// [`DqlErrorCategory`]: crate::DqlErrorCategory
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let gutter = self.gutter_width();
        let mut output = format!(
            "error[{}]: {}\n{:gutter$}--> {}\n",
            self.kind.category().as_str(),
            self.message,
            "",
            self.location(),
        );

        if let Some(line) = source.and_then(|src| source_line(src, self.span.start_inclusive.line())) {
            output.push_str(&format!("{:gutter$} |\n", ""));
            push_snippet_line(&mut output, gutter, &self.span, line, '^');
        }

        for note in &self.notes {
            output.push_str(&format!("{:gutter$} = {note}\n", ""));
            let located = note.span.as_ref().zip(source).and_then(|(span, src)| {
                source_line(src, span.start_inclusive.line()).map(|line| (span, line))
            });
            if let Some((span, line)) = located {
                push_snippet_line(&mut output, gutter, span, line, '-');
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// upsert.dql:1:9: error: unclosed upsert block
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location(), self.message)
    }

    /// `file:line:column` of the primary span, 1-based.
    fn location(&self) -> String {
        let file_name = self.span.file_path.as_ref().map_or_else(
            || "<input>".to_string(),
            |path| path.display().to_string(),
        );
        let start = &self.span.start_inclusive;
        format!("{file_name}:{}:{}", start.line() + 1, start.col_utf8() + 1)
    }

    /// Width of the line-number gutter, wide enough for every line shown.
    fn gutter_width(&self) -> usize {
        let last_line = self
            .notes
            .iter()
            .filter_map(|note| note.span.as_ref())
            .chain(std::iter::once(&self.span))
            .map(|span| span.start_inclusive.line() + 1)
            .max()
            .unwrap_or(1);
        last_line.to_string().len().max(2)
    }
}

/// Returns the 0-based `line` of `source`, split the way the lexer counts
/// lines.
fn source_line(source: &str, line: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line {
        let brk = memchr::memchr2(b'\n', b'\r', rest.as_bytes())?;
        let brk_len = if rest[brk..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[brk + brk_len..];
    }
    let end = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Appends `line` and a marker row under `span`. Spans running past the end
/// of the line are marked up to its end.
fn push_snippet_line(
    output: &mut String,
    gutter: usize,
    span: &DqlSourceSpan,
    line: &str,
    marker: char,
) {
    let line_num = span.start_inclusive.line();
    let col_start = span.start_inclusive.col_utf8();
    let col_end = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col_utf8()
    } else {
        line.chars().count()
    };
    let width = if marker == '^' {
        col_end.saturating_sub(col_start).max(1)
    } else {
        1
    };
    let markers: String = std::iter::repeat_n(marker, width).collect();

    output.push_str(&format!("{:>gutter$} | {line}\n", line_num + 1));
    output.push_str(&format!("{:gutter$} | {:col_start$}{markers}\n", "", ""));
}
