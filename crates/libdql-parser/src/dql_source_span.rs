use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
///
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DqlSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl DqlSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a span covering `self` through the end of `other`.
    ///
    /// The file path of `self` is kept.
    pub fn to(&self, other: &DqlSourceSpan) -> Self {
        Self {
            start_inclusive: self.start_inclusive.clone(),
            end_exclusive: other.end_exclusive.clone(),
            file_path: self.file_path.clone(),
        }
    }

    /// Creates an empty span located at the end of `self`.
    pub fn end_point(&self) -> Self {
        Self {
            start_inclusive: self.end_exclusive.clone(),
            end_exclusive: self.end_exclusive.clone(),
            file_path: self.file_path.clone(),
        }
    }
}
