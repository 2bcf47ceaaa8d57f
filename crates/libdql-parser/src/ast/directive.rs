use crate::ast::ast_node::append_joined;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A directive attached to a query node (`@filter(eq(name, "x"))`,
/// `@cascade`).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub span: DqlSourceSpan,
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for Directive {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('@');
        sink.push_str(&self.name);
        if !self.arguments.is_empty() {
            sink.push('(');
            append_joined(sink, &self.arguments, ", ", |arg, sink| {
                arg.append_source(sink, None)
            });
            sink.push(')');
        }
    }
}
