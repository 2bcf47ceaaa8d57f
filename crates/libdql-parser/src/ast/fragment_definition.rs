use crate::ast::ast_node::append_joined;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Selection;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A fragment definition inside an upsert block.
///
/// ```text
/// fragment petFields { name species }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub span: DqlSourceSpan,
    pub name: String,
    pub selections: Vec<Selection>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" { ");
        append_joined(sink, &self.selections, " ", |selection, sink| {
            selection.append_source(sink, None)
        });
        sink.push_str(" }");
    }
}
