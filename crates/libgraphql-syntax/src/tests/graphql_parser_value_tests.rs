//! Tests for value literal parsing and const-context enforcement.

use std::borrow::Cow;

use crate::ast;
use crate::tests::utils::field_at;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_error;
use crate::tests::utils::parse_executable;
use crate::tests::utils::parse_schema;
use crate::GraphQLParseErrorKind;

/// Parses `{ f(a: <value>) }` and hands the argument value to `check`.
fn with_argument_value(value_source: &str, check: impl FnOnce(&ast::Document<'_>, &ast::Value<'_>)) {
    let source = format!("{{ f(a: {value_source}) }}");
    let doc = parse_executable(&source).unwrap();
    let op = only_operation(&doc);
    let field = field_at(&doc, op.selection_set, 0);
    check(&doc, &doc[field.arguments[0].value]);
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn int_value() {
    with_argument_value("-42", |_, value| {
        let ast::Value::Int(int) = value else {
            panic!("expected an int, got {value:?}");
        };
        assert_eq!(int.raw, "-42");
        assert_eq!(int.to_i32(), Ok(-42));
    });
}

#[test]
fn float_value() {
    with_argument_value("1.5e3", |_, value| {
        let ast::Value::Float(float) = value else {
            panic!("expected a float, got {value:?}");
        };
        assert_eq!(float.raw, "1.5e3");
        assert_eq!(float.to_f64(), Ok(1500.0));
    });
}

#[test]
fn string_value_borrows_when_unescaped() {
    with_argument_value(r#""hello""#, |_, value| {
        let ast::Value::String(string) = value else {
            panic!("expected a string, got {value:?}");
        };
        assert_eq!(string.value, "hello");
        assert!(!string.is_block);
        assert!(matches!(string.value, Cow::Borrowed(_)));
    });
}

#[test]
fn string_value_with_escapes_is_decoded() {
    with_argument_value(r#""a\nb é \u{1F600}""#, |_, value| {
        let ast::Value::String(string) = value else {
            panic!("expected a string, got {value:?}");
        };
        assert_eq!(string.value, "a\nb é 😀");
        assert!(matches!(string.value, Cow::Owned(_)));
    });
}

#[test]
fn block_string_value() {
    with_argument_value("\"\"\"\n    block\n      text\n\"\"\"", |_, value| {
        let ast::Value::String(string) = value else {
            panic!("expected a string, got {value:?}");
        };
        assert!(string.is_block);
        assert_eq!(string.value, "block\n  text");
    });
}

#[test]
fn boolean_and_null_values() {
    with_argument_value("true", |_, value| {
        assert!(matches!(value, ast::Value::Boolean(b) if b.value));
    });
    with_argument_value("false", |_, value| {
        assert!(matches!(value, ast::Value::Boolean(b) if !b.value));
    });
    with_argument_value("null", |_, value| {
        assert!(matches!(value, ast::Value::Null(_)));
    });
}

#[test]
fn enum_value() {
    with_argument_value("RED", |_, value| {
        assert!(matches!(value, ast::Value::Enum(e) if e.value == "RED"));
    });
    // Only the exact spellings are keywords.
    with_argument_value("True", |_, value| {
        assert!(matches!(value, ast::Value::Enum(e) if e.value == "True"));
    });
}

#[test]
fn variable_value() {
    with_argument_value("$id", |_, value| {
        assert!(value.is_variable());
        assert!(matches!(value, ast::Value::Variable(v) if v.name.as_str() == "id"));
    });
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn list_value() {
    with_argument_value("[1, 2, 3]", |doc, value| {
        let ast::Value::List(list) = value else {
            panic!("expected a list, got {value:?}");
        };
        let raws: Vec<&str> = list
            .values
            .iter()
            .map(|id| match &doc[*id] {
                ast::Value::Int(int) => int.raw.as_ref(),
                other => panic!("expected an int, got {other:?}"),
            })
            .collect();
        assert_eq!(raws, ["1", "2", "3"]);
    });
}

#[test]
fn nested_list_value() {
    with_argument_value("[[1], []]", |doc, value| {
        let ast::Value::List(outer) = value else {
            panic!("expected a list, got {value:?}");
        };
        assert_eq!(outer.values.len(), 2);
        assert!(matches!(&doc[outer.values[0]], ast::Value::List(inner) if inner.values.len() == 1));
        assert!(matches!(&doc[outer.values[1]], ast::Value::List(inner) if inner.values.is_empty()));
    });
}

#[test]
fn empty_list_and_object_are_valid() {
    with_argument_value("[]", |_, value| {
        assert!(matches!(value, ast::Value::List(list) if list.values.is_empty()));
    });
    with_argument_value("{}", |_, value| {
        assert!(matches!(value, ast::Value::Object(object) if object.fields.is_empty()));
    });
}

#[test]
fn object_value() {
    let source = r#"{ f(a: {x: 1, y: "s", z: {w: [$v]}}) }"#;
    let doc = parse_executable(source).unwrap();
    let op = only_operation(&doc);
    let field = field_at(&doc, op.selection_set, 0);
    let ast::Value::Object(object) = &doc[field.arguments[0].value] else {
        panic!("expected an object");
    };
    let names: Vec<&str> = object.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["x", "y", "z"]);
    assert_eq!(object.fields[1].to_source(source), r#"y: "s""#);
    assert_eq!(object.to_source(source), r#"{x: 1, y: "s", z: {w: [$v]}}"#);
    assert!(matches!(&doc[object.fields[2].value], ast::Value::Object(_)));
}

#[test]
fn unclosed_list_value() {
    let error = parse_error("{ f(a: [1, 2) }");
    assert_eq!(error.message(), "expected value, found `)`");
}

#[test]
fn unclosed_object_value_at_end_of_input() {
    let error = parse_error("{ f(a: {x: 1");
    assert_eq!(error.message(), "expected `}`, found end of input");
    let note = &error.notes()[0];
    assert_eq!(note.message, "opening `{` of object value here");
    assert_eq!(note.span.map(|span| span.start_inclusive.byte_offset()), Some(7));
}

#[test]
fn missing_value() {
    let error = parse_error("{ f(a: ) }");
    assert_eq!(error.message(), "expected value, found `)`");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec!["value".to_string()],
            found: ")".to_string(),
        },
    );
}

// =============================================================================
// Const contexts
// =============================================================================

#[test]
fn variable_in_variable_default_value() {
    let error = parse_error("query ($a: Int = $b) { f }");
    assert_eq!(error.message(), "variables are not allowed in variable default values");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::VariableInConstContext);
    assert_eq!(error.column(), 18);
}

#[test]
fn variable_nested_in_const_list() {
    let error = parse_error("query ($a: [Int] = [1, $b]) { f }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::VariableInConstContext);
}

#[test]
fn variable_in_type_system_directive() {
    let error = parse_schema("type T @d(a: $x) { f: Int }").unwrap_err();
    assert_eq!(error.message(), "variables are not allowed in const directive arguments");
}

#[test]
fn variable_in_variable_definition_directive() {
    let error = parse_error("query ($a: Int @d(x: $a)) { f }");
    assert_eq!(error.message(), "variables are not allowed in const directive arguments");
}

#[test]
fn variable_in_input_default_value() {
    let error = parse_schema("input I { f: Int = $x }").unwrap_err();
    assert_eq!(error.message(), "variables are not allowed in input value default values");
}

#[test]
fn variables_allowed_in_operation_directives() {
    assert!(parse_executable("query ($a: Boolean) @d(x: $a) { f @include(if: $a) }").is_ok());
}
