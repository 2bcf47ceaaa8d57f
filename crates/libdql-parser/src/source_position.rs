/// A position within DQL source text, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the block
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: Optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole input
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane advance `col_utf8` by 1 and `col_utf16` by 2.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if the token source cannot provide it
    /// - `byte_offset`: 0-based byte offset from the start of input
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of input.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
