use crate::DqlErrorNoteKind;
use crate::DqlSourceSpan;
use crate::SmallVec;

/// Extra context attached to a [`DqlParseError`](crate::DqlParseError) or a
/// lexer error token.
///
/// A note with a span points back at a related location, usually the `{`
/// that opened an unclosed upsert, mutation or operation block.
#[derive(Debug, Clone, PartialEq)]
pub struct DqlErrorNote {
    pub kind: DqlErrorNoteKind,
    pub message: String,
    pub span: Option<DqlSourceSpan>,
}

impl DqlErrorNote {
    fn new(kind: DqlErrorNoteKind, message: impl Into<String>, span: Option<DqlSourceSpan>) -> Self {
        Self { kind, message: message.into(), span }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(DqlErrorNoteKind::General, message, None)
    }

    /// A note pointing at `span`, e.g. "upsert block starts here".
    pub fn general_with_span(message: impl Into<String>, span: DqlSourceSpan) -> Self {
        Self::new(DqlErrorNoteKind::General, message, Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(DqlErrorNoteKind::Help, message, None)
    }
}

impl std::fmt::Display for DqlErrorNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// Most errors carry at most two notes (where the block opened, how to fix
/// it), so they stay inline.
pub type DqlErrorNotes = SmallVec<[DqlErrorNote; 2]>;
