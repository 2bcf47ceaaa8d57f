use crate::ast::AstNode;
use crate::ast::FragmentSpread;
use crate::ast::QueryNode;
use crate::DqlSourceSpan;
use inherent::inherent;

/// An entry in a selection set.
///
/// Fragment spreads only exist between parsing and fragment resolution; a
/// successfully parsed upsert never contains one.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(QueryNode),
    FragmentSpread(FragmentSpread),
}

impl Selection {
    pub fn as_field(&self) -> Option<&QueryNode> {
        match self {
            Selection::Field(node) => Some(node),
            Selection::FragmentSpread(_) => None,
        }
    }

    pub fn span(&self) -> &DqlSourceSpan {
        match self {
            Selection::Field(node) => &node.span,
            Selection::FragmentSpread(spread) => &spread.span,
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            Selection::Field(node) => node.append_source(sink, source),
            Selection::FragmentSpread(spread) => spread.append_source(sink, source),
        }
    }
}
