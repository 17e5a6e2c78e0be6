//! A GraphQL lexer and recursive descent parser.
//!
//! Source text is tokenized lazily by
//! [`StrGraphQLTokenSource`](token_source::StrGraphQLTokenSource) and
//! consumed by [`GraphQLParser`], which builds an [`ast::Document`]. The
//! document owns every node in a single arena; string payloads borrow from
//! the source text until [`ast::Document::into_static`] materializes them.
//!
//! Parsing is fail-fast: the first lexical, syntactic, or depth-limit problem
//! aborts the parse and is reported as a [`GraphQLParseError`] carrying the
//! line, column, and byte offset where it was detected.
//!
//! ```rust
//! use libgraphql_syntax::ast;
//!
//! let doc = libgraphql_syntax::parse_document("{ id name }").unwrap();
//! let ast::Definition::OperationDefinition(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(doc.selection_set(op.selection_set).selections.len(), 2);
//! ```

pub mod ast;
mod byte_span;
mod definition_kind;
mod document_kind;
mod graphql_error_category;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parser_options;
mod reserved_name_context;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;

pub use byte_span::ByteSpan;
pub use definition_kind::DefinitionKind;
pub use document_kind::DocumentKind;
pub use graphql_error_category::GraphQLErrorCategory;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parser_options::ParserOptions;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

/// Parses `source` as a GraphQL document using default [`ParserOptions`].
///
/// Executable and type-system definitions may be mixed freely. Use
/// [`GraphQLParser`] directly to restrict the document kind.
pub fn parse_document(
    source: &str,
) -> Result<ast::Document<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses `source` as a GraphQL document using the given options.
pub fn parse_document_with_options<'src>(
    source: &'src str,
    options: &ParserOptions,
) -> Result<ast::Document<'src>, GraphQLParseError> {
    GraphQLParser::with_options(source, options.clone()).parse_document()
}

#[cfg(test)]
mod tests;
