//! Tests for operation, variable definition, and fragment definition parsing.

use crate::ast;
use crate::tests::utils::field_at;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_error;
use crate::tests::utils::parse_executable;
use crate::GraphQLParseErrorKind;
use crate::ReservedNameContext;

// =============================================================================
// Operations
// =============================================================================

/// `{ id name }` is an anonymous shorthand query with two fields.
#[test]
fn shorthand_query() {
    let doc = parse_executable("{ id name }").unwrap();
    let op = only_operation(&doc);

    assert!(op.is_shorthand);
    assert_eq!(op.operation_kind, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());

    let selections = &doc.selection_set(op.selection_set).selections;
    assert_eq!(selections.len(), 2);
    assert_eq!(field_at(&doc, op.selection_set, 0).name.as_str(), "id");
    assert_eq!(field_at(&doc, op.selection_set, 1).name.as_str(), "name");
}

#[test]
fn named_query_with_variables_and_directives() {
    let source = "query GetUser($id: ID!, $limit: Int = 10) @cached { user(id: $id) { name } }";
    let doc = parse_executable(source).unwrap();
    let op = only_operation(&doc);

    assert!(!op.is_shorthand);
    assert_eq!(op.operation_kind, ast::OperationKind::Query);
    assert_eq!(op.name.as_ref().map(|n| n.as_str()), Some("GetUser"));
    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name.as_str(), "cached");

    let vars = &op.variable_definitions;
    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0].variable.as_str(), "id");
    assert!(doc.type_annotation(vars[0].var_type).is_non_null());
    assert!(vars[0].default_value.is_none());

    assert_eq!(vars[1].variable.as_str(), "limit");
    let default = vars[1].default_value.expect("default value");
    assert!(matches!(&doc[default], ast::Value::Int(int) if int.raw == "10"));
}

#[test]
fn operation_kinds() {
    for (source, kind) in [
        ("query { a }", ast::OperationKind::Query),
        ("mutation { a }", ast::OperationKind::Mutation),
        ("subscription { a }", ast::OperationKind::Subscription),
    ] {
        let doc = parse_executable(source).unwrap();
        let op = only_operation(&doc);
        assert_eq!(op.operation_kind, kind, "{source}");
        assert!(!op.is_shorthand);
        assert!(op.name.is_none());
    }
}

#[test]
fn multiple_operations_in_order() {
    let doc = parse_executable("query A { a } mutation B { b } { c }").unwrap();
    assert_eq!(doc.definitions.len(), 3);
    let names: Vec<Option<&str>> = doc
        .definitions
        .iter()
        .map(|def| match def {
            ast::Definition::OperationDefinition(op) => op.name.as_ref().map(|n| n.as_str()),
            other => panic!("unexpected definition {other:?}"),
        })
        .collect();
    assert_eq!(names, [Some("A"), Some("B"), None]);
}

/// The operation span covers everything from the keyword to the closing
/// brace.
#[test]
fn operation_span_covers_source() {
    let source = "  query Q { a }  ";
    let doc = parse_executable(source).unwrap();
    let op = only_operation(&doc);
    assert_eq!(op.to_source(source), "query Q { a }");
    assert_eq!(doc.to_source(source), "query Q { a }");
}

#[test]
fn operation_missing_selection_set() {
    let error = parse_error("query Q");
    assert_eq!(error.message(), "expected `{`, found end of input");
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
}

// =============================================================================
// Variable definitions
// =============================================================================

#[test]
fn variable_definition_with_directives() {
    let doc = parse_executable("query ($a: Int = 1 @deprecated, $b: [String]) { f }").unwrap();
    let op = only_operation(&doc);
    let vars = &op.variable_definitions;
    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0].directives.len(), 1);
    assert_eq!(vars[0].directives[0].name.as_str(), "deprecated");
    assert!(matches!(
        doc.type_annotation(vars[1].var_type),
        ast::TypeAnnotation::List(_),
    ));
}

#[test]
fn variable_definition_span() {
    let source = "query ($a: Int = 1) { f }";
    let doc = parse_executable(source).unwrap();
    let op = only_operation(&doc);
    assert_eq!(op.variable_definitions[0].to_source(source), "$a: Int = 1");
}

#[test]
fn empty_variable_definitions_rejected() {
    let error = parse_error("query Q() { a }");
    assert_eq!(error.message(), "variable definitions cannot be empty");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: "variable definitions".to_string(),
        },
    );
    assert!(error.notes().iter().any(|note| note.message.contains("omit the parentheses")));
}

#[test]
fn variable_definition_missing_dollar() {
    let error = parse_error("query Q(a: Int) { a }");
    assert_eq!(error.message(), "expected `$`, found `a`");
}

#[test]
fn variable_definition_missing_type() {
    let error = parse_error("query Q($a) { a }");
    assert_eq!(error.message(), "expected `:`, found `)`");
}

// =============================================================================
// Fragment definitions
// =============================================================================

#[test]
fn fragment_definition() {
    let source = "fragment UserFields on User @dir { id }";
    let doc = parse_executable(source).unwrap();
    assert_eq!(doc.definitions.len(), 1);
    let ast::Definition::FragmentDefinition(fragment) = &doc.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.name.as_str(), "UserFields");
    assert_eq!(fragment.type_condition.named_type.as_str(), "User");
    assert_eq!(fragment.type_condition.to_source(source), "on User");
    assert_eq!(fragment.directives.len(), 1);
    assert_eq!(field_at(&doc, fragment.selection_set, 0).name.as_str(), "id");
    assert_eq!(fragment.to_source(source), source);
}

#[test]
fn fragment_named_on_is_reserved() {
    let error = parse_error("fragment on on User { id }");
    assert_eq!(error.message(), "fragment name cannot be `on`");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::ReservedName {
            name: "on".to_string(),
            context: ReservedNameContext::FragmentName,
        },
    );
    assert_eq!(error.column(), 10);
}

#[test]
fn fragment_missing_type_condition() {
    let error = parse_error("fragment F User { id }");
    assert_eq!(error.message(), "expected `on`, found `User`");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec!["`on`".to_string()],
            found: "User".to_string(),
        },
    );
}
