//! This module provides the core token types produced by GraphQL lexers and
//! consumed by the parser.

mod graphql_token;
mod graphql_token_kind;
mod string_value_decoding;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub(crate) use string_value_decoding::decode_block_string;
pub(crate) use string_value_decoding::decode_string;
