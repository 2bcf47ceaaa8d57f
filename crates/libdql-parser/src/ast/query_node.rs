use crate::ast::ast_node::append_joined;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::DqlSourceSpan;
use inherent::inherent;

/// A query root or a field inside a selection set.
///
/// ```text
/// friends : f as friend (first: 10) @filter(has(name)) { name }
/// ^^^^^^^   ^    ^^^^^^ ^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^ ^^^^^^^^
/// alias  var_name attribute arguments  directives     selections
/// ```
///
/// Roots never carry an alias; their `attribute` is the block name.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNode {
    pub span: DqlSourceSpan,
    pub alias: Option<String>,
    /// Query variable defined by this node (`v` in `v as friend`).
    pub var_name: Option<String>,
    pub attribute: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
}

impl QueryNode {
    /// Returns the argument with the given name, if any.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
    }

    /// Returns the fields directly below this node, skipping any
    /// unresolved fragment spreads.
    pub fn fields(&self) -> impl Iterator<Item = &QueryNode> {
        self.selections.iter().filter_map(Selection::as_field)
    }
}

#[inherent]
impl AstNode for QueryNode {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }

        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        if let Some(var_name) = &self.var_name {
            sink.push_str(var_name);
            sink.push_str(" as ");
        }
        sink.push_str(&self.attribute);
        if !self.arguments.is_empty() {
            sink.push('(');
            append_joined(sink, &self.arguments, ", ", |arg, sink| {
                arg.append_source(sink, None)
            });
            sink.push(')');
        }
        for directive in &self.directives {
            sink.push(' ');
            directive.append_source(sink, None);
        }
        if !self.selections.is_empty() {
            sink.push_str(" { ");
            append_joined(sink, &self.selections, " ", |selection, sink| {
                selection.append_source(sink, None)
            });
            sink.push_str(" }");
        }
    }
}
