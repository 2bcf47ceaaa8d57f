/// Whether a note explains an error or suggests a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DqlErrorNoteKind {
    /// Context for the error, often pointing at where a block was opened.
    General,

    /// A suggested fix.
    Help,
}

impl DqlErrorNoteKind {
    /// The prefix a note of this kind is rendered with.
    pub fn label(&self) -> &'static str {
        match self {
            DqlErrorNoteKind::General => "note",
            DqlErrorNoteKind::Help => "help",
        }
    }
}
