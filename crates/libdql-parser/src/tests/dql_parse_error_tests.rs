//! Tests for `DqlParseError` construction, rendering and categorization.

use crate::tests::utils::parse_err;
use crate::DqlErrorCategory;
use crate::DqlErrorNote;
use crate::DqlErrorNoteKind;
use crate::DqlParseError;
use crate::DqlParseErrorKind;
use crate::DqlParserOptions;
use crate::DqlSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;
use std::path::Path;

fn span(line: usize, start_col: usize, end_col: usize, byte_offset: usize) -> DqlSourceSpan {
    DqlSourceSpan::new(
        SourcePosition::new(line, start_col, Some(start_col), byte_offset),
        SourcePosition::new(line, end_col, Some(end_col), byte_offset + end_col - start_col),
    )
}

/// Notes added after construction keep their kind and order.
#[test]
fn notes_accumulate_in_order() {
    let mut error = DqlParseError::new("boom", span(0, 0, 1, 0), DqlParseErrorKind::InvalidSyntax);
    error.add_note("plain");
    error.add_note_with_span("located", span(0, 2, 3, 2));
    error.add_help("fix it");

    let kinds: Vec<_> = error.notes().iter().map(|note| note.kind).collect();
    assert_eq!(
        kinds,
        vec![DqlErrorNoteKind::General, DqlErrorNoteKind::General, DqlErrorNoteKind::Help],
    );
    assert!(error.notes()[0].span.is_none());
    assert!(error.notes()[1].span.is_some());
}

/// `with_notes()` and `from_lexer_error()` keep the given notes.
#[test]
fn constructors_with_notes() {
    let notes = smallvec![DqlErrorNote::help("close it")];
    let error = DqlParseError::with_notes(
        "unclosed",
        span(0, 0, 1, 0),
        DqlParseErrorKind::UnclosedDelimiter { delimiter: "{".to_string() },
        notes,
    );
    assert_eq!(error.notes().len(), 1);

    let lexer_error = DqlParseError::from_lexer_error(
        "Unterminated string literal",
        span(0, 0, 1, 0),
        smallvec![DqlErrorNote::general("String started here")],
    );
    assert_eq!(lexer_error.kind(), &DqlParseErrorKind::LexerError);
    assert_eq!(lexer_error.notes()[0].message, "String started here");
}

/// One-line rendering uses 1-based positions and `<input>` without a path.
#[test]
fn format_oneline_without_path() {
    let error = DqlParseError::new(
        "unexpected token",
        span(2, 4, 5, 20),
        DqlParseErrorKind::InvalidSyntax,
    );
    assert_eq!(error.format_oneline(), "<input>:3:5: error: unexpected token");
    assert_eq!(error.to_string(), error.format_oneline());
}

/// Errors from a file-backed parse name the file.
#[test]
fn format_oneline_with_path() {
    let error = crate::parse_mutation_with_file_path(
        "{ set { x } } }",
        Path::new("mutations/add.dql"),
        &DqlParserOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        error.format_oneline(),
        "mutations/add.dql:1:15: error: unexpected `}` after the end of the block",
    );
}

/// Detailed rendering shows the offending line, an underline and notes
/// with their own snippets.
#[test]
fn format_detailed_with_snippets() {
    let source = "upsert {\n  query\n}";
    let mut error = DqlParseError::new(
        "expected `{` after `query`",
        span(1, 2, 7, 11),
        DqlParseErrorKind::InvalidSyntax,
    );
    error.add_note_with_span("upsert block opened here", span(0, 7, 8, 7));
    error.add_help("Add `{`");

    let expected = concat!(
        "error[syntax]: expected `{` after `query`\n",
        "  --> <input>:2:3\n",
        "   |\n",
        " 2 |   query\n",
        "   |   ^^^^^\n",
        "   = note: upsert block opened here\n",
        " 1 | upsert {\n",
        "   |        -\n",
        "   = help: Add `{`\n",
    );
    assert_eq!(error.format_detailed(Some(source)), expected);
}

/// Without source text only the location and notes are rendered.
#[test]
fn format_detailed_without_source() {
    let mut error = DqlParseError::new("boom", span(0, 0, 1, 0), DqlParseErrorKind::InvalidSyntax);
    error.add_help("try again");
    assert_eq!(
        error.format_detailed(None),
        "error[syntax]: boom\n  --> <input>:1:1\n   = help: try again\n",
    );
}

/// Snippet lines are found with the lexer's line breaks, so a lone `\r`
/// ends a line just like `\n` and `\r\n`.
#[test]
fn format_detailed_with_carriage_returns() {
    let source = "upsert {\r\n  query\r  oops";
    let error = DqlParseError::new("unexpected `oops`", span(2, 2, 6, 19), DqlParseErrorKind::InvalidSyntax);

    let expected = concat!(
        "error[syntax]: unexpected `oops`\n",
        "  --> <input>:3:3\n",
        "   |\n",
        " 3 |   oops\n",
        "   |   ^^^^\n",
    );
    assert_eq!(error.format_detailed(Some(source)), expected);
}

/// The gutter widens to fit the largest line number shown, notes included.
#[test]
fn format_detailed_gutter_fits_note_lines() {
    let source = format!("upsert {{{}\n}} }}", "\n".repeat(99));
    let mut error = DqlParseError::new(
        "unexpected `}` after the end of the block",
        span(100, 2, 3, 111),
        DqlParseErrorKind::TrailingContent { found: "}".to_string() },
    );
    error.add_note_with_span("block starts here", span(0, 7, 8, 7));

    let expected = concat!(
        "error[trailing-content]: unexpected `}` after the end of the block\n",
        "   --> <input>:101:3\n",
        "    |\n",
        "101 | } }\n",
        "    |   ^\n",
        "    = note: block starts here\n",
        "  1 | upsert {\n",
        "    |        -\n",
    );
    assert_eq!(error.format_detailed(Some(&source)), expected);
}

/// Notes render with their kind's label.
#[test]
fn note_display() {
    assert_eq!(DqlErrorNote::general("opened here").to_string(), "note: opened here");
    assert_eq!(DqlErrorNote::help("Add `}`").to_string(), "help: Add `}`");
}

/// An operation payload that never closes is caught by the lexer, so it is
/// a lexical error rather than an unclosed block.
#[test]
fn unterminated_payload_is_lexical() {
    let error = parse_err("{ set {");
    assert_eq!(error.kind(), &DqlParseErrorKind::LexerError);
    assert_eq!(error.kind().category(), DqlErrorCategory::Lexical);
    assert_eq!(error.message(), "Unterminated operation block");
    assert!(error.format_detailed(Some("{ set {")).starts_with("error[lexical]: "));
}

/// Each failure mode maps onto its category.
#[test]
fn categories() {
    let cases = [
        (r#"upsert { query { q(func: eq(name, "x)) { uid } } }"#, DqlErrorCategory::Lexical),
        ("upsert { query { q(func: @) { uid } } }", DqlErrorCategory::Syntax),
        ("upsert {", DqlErrorCategory::Structural),
        ("{ set { x }", DqlErrorCategory::Structural),
        ("{ schema { name: string . } }", DqlErrorCategory::UnsupportedOperation),
        ("{ } }", DqlErrorCategory::TrailingContent),
        ("upsert { query { q(func: has(a)) { ...f } } }", DqlErrorCategory::Semantic),
    ];
    for (source, category) in cases {
        let error = parse_err(source);
        assert_eq!(error.kind().category(), category, "category of `{source}`");
    }
}

/// Inputs above the configured size limit are rejected before lexing.
#[test]
fn input_too_large() {
    let options = DqlParserOptions::default().max_input_bytes(Some(4));
    let error = crate::parse_mutation_with_options("{ set { x } }", &options).unwrap_err();
    assert_eq!(
        error.kind(),
        &DqlParseErrorKind::InputTooLarge { len: 13, limit: 4 },
    );
    assert_eq!(error.kind().category(), DqlErrorCategory::Lexical);
}

/// Error kinds carry a short display of their own.
#[test]
fn kind_display() {
    let kind = DqlParseErrorKind::FragmentCycle {
        cycle_path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
    };
    assert_eq!(kind.to_string(), "fragment cycle: a -> b -> a");
}
