use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A named fragment spread (`...FragmentName`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub span: DqlSourceSpan,
    pub name: String,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
        } else {
            sink.push_str("...");
            sink.push_str(&self.name);
        }
    }
}
