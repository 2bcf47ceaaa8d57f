use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A single argument of a query node, directive or function call.
///
/// Named arguments (`func: ...`, `first: 10`) carry a name; positional ones
/// (the `name` and `"x"` in `eq(name, "x")`) do not.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub span: DqlSourceSpan,
    pub name: Option<String>,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        if let Some(name) = &self.name {
            sink.push_str(name);
            sink.push_str(": ");
        }
        self.value.append_source(sink, None);
    }
}
