//! Tests for type system definition parsing: schema definitions, the six
//! named type definitions, and directive definitions.

use crate::ast;
use crate::ast::DirectiveLocationKind;
use crate::tests::utils::only_type_definition;
use crate::tests::utils::parse_schema;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;
use crate::ReservedNameContext;

fn only_directive_definition<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::DirectiveDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::DirectiveDefinition(def) => def,
        other => panic!("expected a directive definition, got {other:#?}"),
    }
}

// =============================================================================
// Schema definitions
// =============================================================================

#[test]
fn schema_definition() {
    let source = "schema @dir { query: Query mutation: Mutation subscription: Sub }";
    let doc = parse_schema(source).unwrap();
    let ast::Definition::SchemaDefinition(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    assert!(schema.description.is_none());
    assert_eq!(schema.directives.len(), 1);

    let roots: Vec<(ast::OperationKind, &str)> = schema
        .root_operation_types
        .iter()
        .map(|root| (root.operation_kind, root.named_type.as_str()))
        .collect();
    assert_eq!(
        roots,
        [
            (ast::OperationKind::Query, "Query"),
            (ast::OperationKind::Mutation, "Mutation"),
            (ast::OperationKind::Subscription, "Sub"),
        ],
    );
    assert_eq!(schema.root_operation_types[0].to_source(source), "query: Query");
    assert_eq!(schema.to_source(source), source);
}

#[test]
fn schema_definition_with_description() {
    let source = "\"The schema\" schema { query: Q }";
    let doc = parse_schema(source).unwrap();
    let ast::Definition::SchemaDefinition(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.description.as_ref().map(|d| d.value.as_ref()), Some("The schema"));
    assert_eq!(schema.span.start_inclusive.byte_offset(), 0);
}

#[test]
fn empty_schema_definition_rejected() {
    let error = parse_schema("schema { }").unwrap_err();
    assert_eq!(error.message(), "root operation types cannot be empty");
}

#[test]
fn unknown_root_operation_type() {
    let error = parse_schema("schema { foo: Foo }").unwrap_err();
    assert_eq!(
        error.message(),
        "unknown operation type `foo`; expected `query`, `mutation`, or `subscription`",
    );
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(error.column(), 10);
}

// =============================================================================
// Scalar, object, and interface types
// =============================================================================

#[test]
fn scalar_with_description_and_directive() {
    let source = "\"An instant\"\nscalar DateTime @specifiedBy(url: \"https://example.com\")";
    let doc = parse_schema(source).unwrap();
    let ast::TypeDefinition::Scalar(scalar) = only_type_definition(&doc) else {
        panic!("expected a scalar");
    };
    assert_eq!(scalar.name.as_str(), "DateTime");
    assert_eq!(scalar.description.as_ref().map(|d| d.value.as_ref()), Some("An instant"));
    assert_eq!(scalar.directives[0].name.as_str(), "specifiedBy");

    // The description is part of the definition.
    assert_eq!(scalar.span.start_inclusive.byte_offset(), 0);
    assert_eq!(only_type_definition(&doc).to_source(source), source);
    assert_eq!(only_type_definition(&doc).description().map(|d| d.is_block), Some(false));
}

#[test]
fn object_type_with_fields() {
    let source = r#"
        type User implements Node & Entity @key(fields: "id") {
          "The id"
          id: ID!
          friends(first: Int = 10, "cursor" after: String): [User!]! @deprecated
        }
    "#;
    let doc = parse_schema(source).unwrap();
    let ast::TypeDefinition::Object(user) = only_type_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(user.name.as_str(), "User");
    let interfaces: Vec<&str> = user.implements.iter().map(|n| n.as_str()).collect();
    assert_eq!(interfaces, ["Node", "Entity"]);
    assert_eq!(user.directives[0].name.as_str(), "key");
    assert_eq!(user.fields.len(), 2);

    let id = &user.fields[0];
    assert_eq!(id.name.as_str(), "id");
    assert_eq!(id.description.as_ref().map(|d| d.value.as_ref()), Some("The id"));
    assert!(doc[id.field_type].is_non_null());

    let friends = &user.fields[1];
    assert_eq!(friends.arguments.len(), 2);
    assert_eq!(friends.arguments[0].name.as_str(), "first");
    assert!(friends.arguments[0].default_value.is_some());
    assert_eq!(
        friends.arguments[1].description.as_ref().map(|d| d.value.as_ref()),
        Some("cursor"),
    );
    assert_eq!(friends.directives[0].name.as_str(), "deprecated");
    assert_eq!(friends.arguments[0].to_source(source), "first: Int = 10");
}

#[test]
fn implements_allows_leading_ampersand() {
    let doc = parse_schema("type T implements & A & B { f: Int }").unwrap();
    let ast::TypeDefinition::Object(object) = only_type_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(object.implements.len(), 2);
}

#[test]
fn object_type_without_fields() {
    let doc = parse_schema("type Marker @tag").unwrap();
    let ast::TypeDefinition::Object(object) = only_type_definition(&doc) else {
        panic!("expected an object type");
    };
    assert!(object.fields.is_empty());
    assert_eq!(object.directives.len(), 1);
}

#[test]
fn empty_fields_definition_rejected() {
    let error = parse_schema("type T {}").unwrap_err();
    assert_eq!(error.message(), "field definitions cannot be empty");
}

#[test]
fn interface_type() {
    let doc = parse_schema("interface Node implements Entity { id: ID! }").unwrap();
    let ast::TypeDefinition::Interface(node) = only_type_definition(&doc) else {
        panic!("expected an interface");
    };
    assert_eq!(node.name.as_str(), "Node");
    assert_eq!(node.implements[0].as_str(), "Entity");
    assert_eq!(node.fields[0].name.as_str(), "id");
}

#[test]
fn field_definition_missing_colon() {
    let error = parse_schema("type User { name String }").unwrap_err();
    assert_eq!(error.message(), "expected `:`, found `String`");
    assert_eq!(error.column(), 18);
}

// =============================================================================
// Union, enum, and input types
// =============================================================================

#[test]
fn union_type() {
    let doc = parse_schema("union SearchResult = | User | Post").unwrap();
    let ast::TypeDefinition::Union(union) = only_type_definition(&doc) else {
        panic!("expected a union");
    };
    let members: Vec<&str> = union.members.iter().map(|n| n.as_str()).collect();
    assert_eq!(members, ["User", "Post"]);
}

#[test]
fn union_type_without_members() {
    let doc = parse_schema("union Empty").unwrap();
    let ast::TypeDefinition::Union(union) = only_type_definition(&doc) else {
        panic!("expected a union");
    };
    assert!(union.members.is_empty());
}

#[test]
fn union_missing_member_after_pipe() {
    let error = parse_schema("union U = A |").unwrap_err();
    assert_eq!(error.message(), "expected name, found end of input");
}

#[test]
fn enum_type() {
    let doc = parse_schema("enum Color { \"Warm\" RED @deprecated GREEN BLUE }").unwrap();
    let ast::TypeDefinition::Enum(color) = only_type_definition(&doc) else {
        panic!("expected an enum");
    };
    let names: Vec<&str> = color.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["RED", "GREEN", "BLUE"]);
    assert_eq!(color.values[0].description.as_ref().map(|d| d.value.as_ref()), Some("Warm"));
    assert_eq!(color.values[0].directives.len(), 1);
}

#[test]
fn enum_value_reserved_names() {
    for reserved in ["true", "false", "null"] {
        let error = parse_schema(&format!("enum E {{ A {reserved} }}")).unwrap_err();
        assert_eq!(error.message(), format!("enum value cannot be `{reserved}`"));
        assert_eq!(
            error.kind(),
            &GraphQLParseErrorKind::ReservedName {
                name: reserved.to_string(),
                context: ReservedNameContext::EnumValue,
            },
        );
        assert_eq!(error.column(), 12);
    }
}

#[test]
fn input_object_type() {
    let source = "input Filter { \"Max\" limit: Int = 10 @deprecated tags: [String!] }";
    let doc = parse_schema(source).unwrap();
    let ast::TypeDefinition::InputObject(filter) = only_type_definition(&doc) else {
        panic!("expected an input object");
    };
    assert_eq!(filter.fields.len(), 2);
    let limit = &filter.fields[0];
    assert_eq!(limit.description.as_ref().map(|d| d.value.as_ref()), Some("Max"));
    let default = limit.default_value.expect("default value");
    assert!(matches!(&doc[default], ast::Value::Int(int) if int.raw == "10"));
    assert_eq!(limit.directives.len(), 1);
    assert!(filter.fields[1].default_value.is_none());
}

#[test]
fn empty_input_fields_rejected() {
    let error = parse_schema("input I { }").unwrap_err();
    assert_eq!(error.message(), "input field definitions cannot be empty");
}

// =============================================================================
// Directive definitions
// =============================================================================

#[test]
fn directive_definition() {
    let source = "\"Caches\" directive @cache(ttl: Int = 60) repeatable on FIELD | QUERY";
    let doc = parse_schema(source).unwrap();
    let directive = only_directive_definition(&doc);
    assert_eq!(directive.name.as_str(), "cache");
    assert!(directive.repeatable);
    assert_eq!(directive.arguments.len(), 1);
    assert_eq!(directive.description.as_ref().map(|d| d.value.as_ref()), Some("Caches"));

    let kinds: Vec<DirectiveLocationKind> = directive.locations.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, [DirectiveLocationKind::Field, DirectiveLocationKind::Query]);
    assert_eq!(directive.locations[1].to_source(source), "QUERY");
    assert_eq!(directive.to_source(source), source);
}

#[test]
fn directive_definition_with_leading_pipe() {
    let doc = parse_schema("directive @a on | OBJECT | INTERFACE").unwrap();
    let directive = only_directive_definition(&doc);
    assert!(!directive.repeatable);
    assert_eq!(directive.locations.len(), 2);
}

#[test]
fn duplicate_directive_locations_are_preserved() {
    let doc = parse_schema("directive @a on FIELD | FIELD").unwrap();
    let directive = only_directive_definition(&doc);
    assert_eq!(directive.locations.len(), 2);
    assert_eq!(directive.locations[0].kind, directive.locations[1].kind);
}

#[test]
fn unknown_directive_location_suggests_closest() {
    let error = parse_schema("directive @a on FIELDD").unwrap_err();
    assert_eq!(error.message(), "unknown directive location: FIELDD");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnknownDirectiveLocation {
            name: "FIELDD".to_string(),
        },
    );
    let help: Vec<&str> = error
        .notes()
        .iter()
        .filter(|note| note.kind == GraphQLErrorNoteKind::Help)
        .map(|note| note.message.as_str())
        .collect();
    assert_eq!(help, ["did you mean `FIELD`?"]);
}

#[test]
fn directive_location_names_are_case_sensitive() {
    let error = parse_schema("directive @a on field").unwrap_err();
    assert_eq!(error.message(), "unknown directive location: field");
    assert!(error.notes().iter().any(|note| note.message == "did you mean `FIELD`?"));
}

#[test]
fn unrecognizable_directive_location_has_no_suggestion() {
    let error = parse_schema("directive @a on SOMETHING_ELSE_ENTIRELY").unwrap_err();
    assert!(error.notes().iter().all(|note| note.kind != GraphQLErrorNoteKind::Help));
}

#[test]
fn directive_definition_missing_on() {
    let error = parse_schema("directive @a FIELD").unwrap_err();
    assert_eq!(error.message(), "expected `on`, found `FIELD`");
}
