//! Tests for the errors the parser reports: their messages, kinds, and
//! positions, including lexical errors surfaced through the parser.

use crate::tests::utils::init_logging;
use crate::tests::utils::mock_name;
use crate::tests::utils::mock_token_at;
use crate::tests::utils::parse_error;
use crate::tests::utils::parse_schema;
use crate::tests::utils::MockTokenSource;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorCategory;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::GraphQLStringParsingError;
use crate::SourcePosition;

// =============================================================================
// Positions
// =============================================================================

#[test]
fn unclosed_selection_set_reports_end_of_input() {
    let error = parse_error("{ id ");
    assert_eq!(error.message(), "expected `}`, found end of input");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedEof {
            expected: vec!["`}`".to_string()],
        },
    );
    assert_eq!((error.line(), error.column(), error.offset()), (1, 6, 5));

    let note = &error.notes()[0];
    assert_eq!(note.kind, GraphQLErrorNoteKind::General);
    assert_eq!(note.message, "opening `{` of selection set here");
    assert_eq!(note.span.map(|span| span.start_inclusive.byte_offset()), Some(0));
}

#[test]
fn error_position_on_later_line() {
    let error = parse_error("query Q {\n  user {\n    id\n  }\n  name(\n}");
    assert_eq!(error.message(), "expected name, found `}`");
    assert_eq!((error.line(), error.column()), (6, 1));
}

#[test]
fn unclosed_argument_list_notes_its_opening() {
    let error = parse_error("{ f(a: 1 ");
    assert_eq!(error.message(), "expected `)`, found end of input");
    assert_eq!(error.notes()[0].message, "opening `(` of argument list here");
}

#[test]
fn display_includes_position() {
    let error = parse_error("{ a }\n}");
    assert_eq!(error.to_string(), "expected definition, found `}` at line 2 column 1");
}

// =============================================================================
// Documents and definitions
// =============================================================================

#[test]
fn empty_document() {
    for source in ["", "   \n\t, ,"] {
        let error = parse_error(source);
        assert_eq!(error.message(), "expected definition, found end of input");
        assert_eq!(
            error.kind(),
            &GraphQLParseErrorKind::UnexpectedEof {
                expected: vec!["definition".to_string()],
            },
        );
    }
}

#[test]
fn unknown_definition_keyword() {
    let error = parse_error("foo { a }");
    assert_eq!(error.message(), "expected definition, found `foo`");
    assert_eq!(error.category(), GraphQLErrorCategory::Syntax);
}

#[test]
fn operation_keywords_are_case_sensitive() {
    let error = parse_error("Query { a }");
    assert_eq!(error.message(), "expected definition, found `Query`");
}

#[test]
fn description_followed_by_end_of_input() {
    let error = parse_error("\"dangling\"");
    assert_eq!(error.message(), "expected definition, found end of input");
}

#[test]
fn description_before_operation_rejected() {
    let error = parse_error("\"\"\"Docs\"\"\" query { a }");
    assert_eq!(error.message(), "unexpected description");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnexpectedDescription);
    assert_eq!(error.span().byte_span().len(), 10);
    assert!(error.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Help));
}

#[test]
fn description_before_fragment_rejected() {
    let error = parse_error("\"Docs\" fragment F on T { a }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnexpectedDescription);
}

#[test]
fn operation_after_valid_definition() {
    let error = parse_error("{ a } query Q( { b }");
    assert_eq!(error.message(), "expected `$`, found `{`");
}

// =============================================================================
// Lexical errors
// =============================================================================

#[test]
fn unexpected_character() {
    let error = parse_error("{ a; }");
    assert_eq!(error.message(), "unexpected character `;`");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnexpectedCharacter(';'));
    assert_eq!(error.column(), 4);
    assert_eq!(error.category(), GraphQLErrorCategory::Lexical);
}

#[test]
fn invisible_character_is_named() {
    let error = parse_error("{ a\u{200B} }");
    assert!(error.message().contains("U+200B"), "{}", error.message());
    assert!(error.message().contains("ZERO WIDTH SPACE"), "{}", error.message());
}

#[test]
fn unexpected_character_at_definition_start() {
    let error = parse_error("?");
    assert_eq!(error.message(), "unexpected character `?`");
    assert_eq!(error.column(), 1);
}

#[test]
fn unterminated_string() {
    let error = parse_error("{ f(a: \"abc) }");
    assert_eq!(error.message(), "unterminated string");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnterminatedString);
    assert_eq!(error.column(), 8);
    assert!(error.kind().is_lexical());
}

#[test]
fn unterminated_block_string() {
    let error = parse_schema("\"\"\"never closed\ntype T { f: Int }").unwrap_err();
    assert_eq!(error.kind(), &GraphQLParseErrorKind::UnterminatedString);
    assert_eq!((error.line(), error.column()), (1, 1));
}

#[test]
fn invalid_string_escape() {
    let error = parse_error(r#"{ f(a: "\q") }"#);
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidString(GraphQLStringParsingError::InvalidEscapeSequence(
            "\\q".to_string(),
        )),
    );
}

#[test]
fn invalid_numbers() {
    for (source, message) in [
        ("{ f(a: 01) }", "invalid number, unexpected digit after 0: `1`"),
        ("{ f(a: 1.) }", "invalid number, expected digit but found `)`"),
        ("{ f(a: -) }", "invalid number, expected digit but found `)`"),
        ("{ f(a: 1e", "invalid number, expected digit but found end of input"),
    ] {
        let error = parse_error(source);
        assert_eq!(error.message(), message, "{source}");
        assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidNumber);
        assert_eq!(error.column(), 8, "{source}");
    }
}

#[test]
fn invalid_ellipsis() {
    for (source, message) in [
        ("{ ..Frag }", "unexpected `..` (use `...` for spread operator)"),
        ("{ .Frag }", "unexpected `.`"),
        ("{ . . . Frag }", "unexpected `. . .`"),
    ] {
        let error = parse_error(source);
        assert_eq!(error.message(), message, "{source}");
        assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidEllipsis);
        assert_eq!(error.column(), 3);
    }
}

/// A lexical error that occurs before the parser looks at its token is
/// still reported once the parser gets there.
#[test]
fn lexical_error_from_token_source() {
    init_logging();
    let span = GraphQLSourceSpan::new(
        SourcePosition::new(0, 2, None, 2),
        SourcePosition::new(0, 3, None, 3),
    );
    let lexer_error = GraphQLParseError::new(
        "unterminated string",
        span,
        GraphQLParseErrorKind::UnterminatedString,
    );
    let source = MockTokenSource::from_results(vec![
        Ok(mock_token_at(GraphQLTokenKind::CurlyBraceOpen, 0)),
        Ok(mock_token_at(mock_name("a"), 1)),
        Err(lexer_error.clone()),
    ]);
    let error = GraphQLParser::from_token_source(source)
        .parse_executable_document()
        .unwrap_err();
    assert_eq!(error, lexer_error);
}

// =============================================================================
// File paths and formatting
// =============================================================================

#[test]
fn file_path_is_attached_to_errors() {
    init_logging();
    let error = GraphQLParser::new("{ id ")
        .with_file_path("schema/query.graphql")
        .parse_document()
        .unwrap_err();
    assert_eq!(
        error.file_path().map(|path| path.to_string_lossy().into_owned()),
        Some("schema/query.graphql".to_string()),
    );
    assert_eq!(
        error.format_oneline(),
        "schema/query.graphql:1:6: error: expected `}`, found end of input",
    );
}

#[test]
fn format_detailed_with_source() {
    init_logging();
    let source = "{ id ";
    let error = GraphQLParser::new(source)
        .with_file_path("query.graphql")
        .parse_document()
        .unwrap_err();
    let expected = "error: expected `}`, found end of input\n\
                    \x20 --> query.graphql:1:6\n\
                    \x20  |\n\
                    \x201 | { id \n\
                    \x20  |      ^\n\
                    \x20  = note: opening `{` of selection set here\n\
                    \x20     1 | { id \n\
                    \x20       | -\n";
    assert_eq!(error.format_detailed(Some(source)), expected);
}

#[test]
fn format_without_file_path_uses_placeholder() {
    let error = parse_error("{ a; }");
    assert_eq!(error.format_oneline(), "<input>:1:4: error: unexpected character `;`");
    let detailed = error.format_detailed(None);
    assert!(detailed.starts_with("error: unexpected character `;`\n  --> <input>:1:4\n"));
    assert!(!detailed.contains('^'));
}
