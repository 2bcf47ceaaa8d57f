use crate::DqlSourceSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved (e.g. for tooling use).
///
/// Inside query and fragment blocks, comments and commas are attached to the
/// following token as "preceding trivia". Inside mutation blocks comments are
/// emitted as `DqlTokenKind::Text` instead.
#[derive(Clone, Debug, PartialEq)]
pub enum DqlTriviaToken<'src> {
    /// A comment, which starts with `#` and extends to the end of the line.
    Comment {
        /// The comment text (excluding the leading `#`).
        value: Cow<'src, str>,
        /// The source location of the comment.
        span: DqlSourceSpan,
    },

    /// A comma separator. Commas between arguments are optional.
    Comma {
        /// The source location of the comma.
        span: DqlSourceSpan,
    },
}
