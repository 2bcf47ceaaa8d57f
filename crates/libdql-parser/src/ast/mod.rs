//! AST types produced by the parser.
//!
//! Mutation payloads ([`Mutation`]) are raw bytes. Query sections of an
//! upsert block parse into a [`QueryResult`] of [`QueryNode`] roots; every
//! node carries a [`DqlSourceSpan`](crate::DqlSourceSpan) and implements
//! [`AstNode`] for source reconstruction.

mod argument;
mod ast_node;
mod directive;
mod fragment_definition;
mod fragment_spread;
mod mutation;
mod query_node;
mod query_result;
mod selection;
mod value;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use mutation::Mutation;
pub use query_node::QueryNode;
pub use query_result::QueryResult;
pub use selection::Selection;
pub use value::Value;

#[cfg(test)]
mod tests;
