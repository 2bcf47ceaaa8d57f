use crate::ast::ast_node::append_joined;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A value in argument position.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A bare name: a predicate, a query variable or a keyword such as
    /// `_all_`.
    Name { span: DqlSourceSpan, name: String },
    /// Raw integer text (decimal or `0x` hexadecimal).
    Int { span: DqlSourceSpan, raw: String },
    /// Raw float text.
    Float { span: DqlSourceSpan, raw: String },
    /// Unescaped string content.
    String { span: DqlSourceSpan, value: String },
    /// `<iri>`, stored without angle brackets.
    Iri { span: DqlSourceSpan, iri: String },
    /// `$name`
    Variable { span: DqlSourceSpan, name: String },
    /// `[a, b]`
    List { span: DqlSourceSpan, values: Vec<Value> },
    /// `name(arguments)`, e.g. `eq(name, "x")` or `uid(v)`.
    Call {
        span: DqlSourceSpan,
        name: String,
        arguments: Vec<Argument>,
    },
    /// `(a, b)`
    Group { span: DqlSourceSpan, values: Vec<Value> },
}

impl Value {
    pub fn span(&self) -> &DqlSourceSpan {
        match self {
            Value::Name { span, .. }
            | Value::Int { span, .. }
            | Value::Float { span, .. }
            | Value::String { span, .. }
            | Value::Iri { span, .. }
            | Value::Variable { span, .. }
            | Value::List { span, .. }
            | Value::Call { span, .. }
            | Value::Group { span, .. } => span,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Value::Name { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(self.span(), sink, src);
            return;
        }
        match self {
            Value::Name { name, .. } => sink.push_str(name),
            Value::Int { raw, .. } | Value::Float { raw, .. } => sink.push_str(raw),
            Value::String { value, .. } => append_quoted(sink, value),
            Value::Iri { iri, .. } => {
                sink.push('<');
                sink.push_str(iri);
                sink.push('>');
            },
            Value::Variable { name, .. } => {
                sink.push('$');
                sink.push_str(name);
            },
            Value::List { values, .. } => {
                sink.push('[');
                append_joined(sink, values, ", ", |value, sink| {
                    value.append_source(sink, None)
                });
                sink.push(']');
            },
            Value::Call { name, arguments, .. } => {
                sink.push_str(name);
                sink.push('(');
                append_joined(sink, arguments, ", ", |arg, sink| {
                    arg.append_source(sink, None)
                });
                sink.push(')');
            },
            Value::Group { values, .. } => {
                sink.push('(');
                append_joined(sink, values, ", ", |value, sink| {
                    value.append_source(sink, None)
                });
                sink.push(')');
            },
        }
    }
}

fn append_quoted(sink: &mut String, value: &str) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            _ => sink.push(ch),
        }
    }
    sink.push('"');
}
