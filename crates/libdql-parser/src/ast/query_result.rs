use crate::ast::AstNode;
use crate::ast::QueryNode;
use inherent::inherent;

/// The query roots collected from every `query { ... }` section of one
/// upsert block, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    pub roots: Vec<QueryNode>,
}

impl QueryResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Looks up a root by its block name (`me` in `me(func: ...) { ... }`).
    pub fn root(&self, attribute: &str) -> Option<&QueryNode> {
        self.roots.iter().find(|root| root.attribute == attribute)
    }
}

#[inherent]
impl AstNode for QueryResult {
    /// Renders one root per line.
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        for (index, root) in self.roots.iter().enumerate() {
            if index > 0 {
                sink.push('\n');
            }
            root.append_source(sink, source);
        }
    }
}
