use crate::DqlSourceSpan;

/// Append the source text for `span` to `sink` by slicing directly from
/// `source` via byte offsets (zero-copy, lossless).
pub(crate) fn append_span_source_slice(
    span: &DqlSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span \
         (start {start} > end {end})",
    );
    if let Some(slice) = source.get(start..end) {
        sink.push_str(slice);
    }
}

/// Appends `items` rendered through `render`, separated by `separator`.
pub(crate) fn append_joined<T>(
    sink: &mut String,
    items: &[T],
    separator: &str,
    mut render: impl FnMut(&T, &mut String),
) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            sink.push_str(separator);
        }
        render(item, sink);
    }
}

/// Trait implemented by all AST node types. Provides source reconstruction
/// methods.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (fast, lossless):** When `source` is `Some(s)`,
///   [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`.
///
/// - **Synthetic-formatting mode (lossy):** When `source` is `None`,
///   [`append_source`](AstNode::append_source) walks the AST and emits
///   names, values and punctuation with standard spacing. This is the only
///   mode that reflects fragment resolution, since inlined selections are
///   not contiguous in the source.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    );

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: Option<&str>,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
