/// Error returned when parsing a DQL string value fails.
///
/// This error can occur during `DqlTokenKind::parse_string_value()` when
/// processing escape sequences.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DqlStringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The string was not properly terminated.
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// An invalid Unicode escape sequence was encountered (e.g. `\uZZZZ`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
