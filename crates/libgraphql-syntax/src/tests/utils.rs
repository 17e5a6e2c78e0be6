//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Routes `log` records to the test harness's captured output. Safe to call
/// from every test; only the first call installs the subscriber.
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Creates a mock token whose one-byte span starts at `offset` on the first
/// line.
pub(crate) fn mock_token_at(kind: GraphQLTokenKind<'static>, offset: usize) -> GraphQLToken<'static> {
    GraphQLToken::new(
        kind,
        GraphQLSourceSpan::new(
            SourcePosition::new(0, offset, None, offset),
            SourcePosition::new(0, offset + 1, None, offset + 1),
        ),
    )
}

/// Lays `kinds` out as consecutive one-byte tokens.
pub(crate) fn mock_tokens(kinds: Vec<GraphQLTokenKind<'static>>) -> Vec<GraphQLToken<'static>> {
    kinds
        .into_iter()
        .enumerate()
        .map(|(offset, kind)| mock_token_at(kind, offset))
        .collect()
}

pub(crate) fn mock_name(name: &str) -> GraphQLTokenKind<'static> {
    GraphQLTokenKind::name_owned(name.to_string())
}

/// A mock token source that replays a fixed list of results.
///
/// Uses `'static` lifetime since mock tokens use owned strings.
pub(crate) struct MockTokenSource {
    results: std::vec::IntoIter<Result<GraphQLToken<'static>, GraphQLParseError>>,
}

impl MockTokenSource {
    pub(crate) fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self::from_results(tokens.into_iter().map(Ok).collect())
    }

    pub(crate) fn from_results(
        results: Vec<Result<GraphQLToken<'static>, GraphQLParseError>>,
    ) -> Self {
        Self {
            results: results.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Result<GraphQLToken<'static>, GraphQLParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.results.next()
    }
}

pub(crate) fn parse_schema(source: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    init_logging();
    GraphQLParser::new(source).parse_schema_document()
}

pub(crate) fn parse_executable(source: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    init_logging();
    GraphQLParser::new(source).parse_executable_document()
}

pub(crate) fn parse_mixed(source: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    init_logging();
    GraphQLParser::new(source).parse_document()
}

/// Parses `source` as a mixed document that is expected to fail.
pub(crate) fn parse_error(source: &str) -> GraphQLParseError {
    match parse_mixed(source) {
        Ok(doc) => panic!("expected a parse error for {source:?}, got {doc:#?}"),
        Err(error) => error,
    }
}

/// The only operation in `doc`.
pub(crate) fn only_operation<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::OperationDefinition(op) => op,
        other => panic!("expected an operation, got {other:#?}"),
    }
}

/// The `index`th selection of `selection_set`, which must be a field.
pub(crate) fn field_at<'a, 'src>(
    doc: &'a ast::Document<'src>,
    selection_set: ast::SelectionSetId,
    index: usize,
) -> &'a ast::Field<'src> {
    match &doc.selection_set(selection_set).selections[index] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:#?}"),
    }
}

/// The only type definition in `doc`.
pub(crate) fn only_type_definition<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::TypeDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::TypeDefinition(def) => def,
        other => panic!("expected a type definition, got {other:#?}"),
    }
}
