//! This module provides the core token types used by DQL token sources and
//! the parser.

mod dql_token;
mod dql_token_kind;
mod dql_trivia_token;

pub use dql_token::DqlToken;
pub use dql_token::DqlTriviaTokenVec;
pub use dql_token_kind::DqlTokenKind;
pub use dql_trivia_token::DqlTriviaToken;
