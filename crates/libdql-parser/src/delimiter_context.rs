/// The construct a delimiter was opened for, used in error messages and
/// notes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DelimiterContext {
    /// `upsert { ... }`
    UpsertBlock,
    /// `{ set { ... } }` at the top level or `mutation { ... }` in an upsert
    MutationBlock,
    /// `set { ... }`, `delete { ... }`, etc.
    OperationBlock,
    /// `query { ... }` in an upsert
    QueryBlock,
    /// `fragment name { ... }` in an upsert
    FragmentDefinition,
    /// `{ field ... }` below a query root or field
    SelectionSet,
    /// `(arg: value)` after a query node, directive or function name
    Arguments,
    /// `[value, ...]`
    ListValue,
    /// `(value, ...)`
    GroupValue,
}

impl DelimiterContext {
    /// Returns a human-readable description of this context.
    pub fn description(&self) -> &'static str {
        match self {
            DelimiterContext::UpsertBlock => "upsert block",
            DelimiterContext::MutationBlock => "mutation block",
            DelimiterContext::OperationBlock => "operation block",
            DelimiterContext::QueryBlock => "query block",
            DelimiterContext::FragmentDefinition => "fragment definition",
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::Arguments => "arguments",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::GroupValue => "group value",
        }
    }

    /// Returns the opening delimiter for this context.
    pub fn open_delimiter(&self) -> &'static str {
        match self {
            DelimiterContext::Arguments | DelimiterContext::GroupValue => "(",
            DelimiterContext::ListValue => "[",
            _ => "{",
        }
    }
}
