pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

/// Indents every line of `text` by `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let padding = " ".repeat(width);
    text.lines()
        .map(|line| format!("{padding}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
