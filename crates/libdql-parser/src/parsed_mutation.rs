use crate::ast::Mutation;
use crate::ast::QueryResult;

/// The outcome of a successful [`parse_mutation()`](crate::parse_mutation).
///
/// A bare `{ ... }` mutation block yields `query: None`. An `upsert { ... }`
/// block always yields `Some` query result (possibly with no roots) and a
/// mutation only if the upsert contained a `mutation { ... }` section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedMutation {
    pub query: Option<QueryResult>,
    pub mutation: Option<Mutation>,
}

impl ParsedMutation {
    /// Returns `true` if this came from an `upsert { ... }` block.
    pub fn is_upsert(&self) -> bool {
        self.query.is_some()
    }
}
