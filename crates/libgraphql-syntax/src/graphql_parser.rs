//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with any
//! token source implementing [`GraphQLTokenSource`]. It supports parsing schema
//! documents, executable documents, and mixed documents.
//!
//! # Architecture
//!
//! Each grammar production has a corresponding `parse_*` method returning
//! `Result<_, GraphQLParseError>`. Parsing is fail-fast: the first error is
//! propagated with `?` all the way out of the public entry point and no
//! partial document is produced.
//!
//! Values, type annotations, and selection sets are pushed into the
//! document's [`AstArena`](ast::AstArena) as soon as they are complete; their
//! parents hold the returned ids.

use std::path::PathBuf;

use crate::ast;
use crate::ast::DirectiveLocationKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::describe_char;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::DefinitionKind;
use crate::DocumentKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParserOptions;
use crate::ReservedNameContext;
use crate::SourcePosition;

type ParseResult<T> = Result<T, GraphQLParseError>;

// =============================================================================
// Delimited lists
// =============================================================================

/// A bracketed list in the grammar, for error messages and for deciding
/// whether the list may be empty.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `{ field ... }` in operations/fragments
    SelectionSet,
    /// `(arg: value)` on fields and directives
    Arguments,
    /// `($var: Type)` in operation variable definitions
    VariableDefinitions,
    /// `[value, ...]` in list literals
    ListValue,
    /// `{ field: value }` in object literals
    ObjectValue,
    /// `schema { query: Query }` and `extend schema { ... }`
    RootOperationTypes,
    /// `{ name: Type }` in object and interface types
    FieldsDefinition,
    /// `(name: Type)` in field and directive argument definitions
    ArgumentsDefinition,
    /// `{ A B C }` in enum types
    EnumValuesDefinition,
    /// `{ name: Type }` in input object types
    InputFieldsDefinition,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::Arguments => "argument list",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
            DelimiterContext::RootOperationTypes => "root operation types",
            DelimiterContext::FieldsDefinition => "field definitions",
            DelimiterContext::ArgumentsDefinition => "argument definitions",
            DelimiterContext::EnumValuesDefinition => "enum values",
            DelimiterContext::InputFieldsDefinition => "input field definitions",
        }
    }

    fn delimiters(&self) -> (GraphQLTokenKind<'static>, GraphQLTokenKind<'static>) {
        match self {
            DelimiterContext::Arguments
            | DelimiterContext::VariableDefinitions
            | DelimiterContext::ArgumentsDefinition => {
                (GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose)
            },
            DelimiterContext::ListValue => (
                GraphQLTokenKind::SquareBracketOpen,
                GraphQLTokenKind::SquareBracketClose,
            ),
            DelimiterContext::SelectionSet
            | DelimiterContext::ObjectValue
            | DelimiterContext::RootOperationTypes
            | DelimiterContext::FieldsDefinition
            | DelimiterContext::EnumValuesDefinition
            | DelimiterContext::InputFieldsDefinition => (
                GraphQLTokenKind::CurlyBraceOpen,
                GraphQLTokenKind::CurlyBraceClose,
            ),
        }
    }

    /// `[]` and `{}` are valid literal values; every other list needs at
    /// least one item.
    fn allows_empty(&self) -> bool {
        matches!(self, DelimiterContext::ListValue | DelimiterContext::ObjectValue)
    }
}

/// Context for parsing values, determining whether variables are allowed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Variables are allowed (e.g., field arguments in operations).
    AllowVariables,
    /// Parsing a default value for a variable definition.
    VariableDefaultValue,
    /// Parsing a directive argument in a const context.
    DirectiveArgument,
    /// Parsing a default value for an input field or argument definition.
    InputDefaultValue,
}

impl ConstContext {
    /// Human-readable name of a const-only position, or `None` when
    /// variables are allowed.
    fn const_description(&self) -> Option<&'static str> {
        match self {
            ConstContext::AllowVariables => None,
            ConstContext::VariableDefaultValue => Some("variable default values"),
            ConstContext::DirectiveArgument => Some("const directive arguments"),
            ConstContext::InputDefaultValue => Some("input value default values"),
        }
    }
}

/// What the next definition in a document is, decided from its first
/// token (and, for `extend`, the one after it).
#[derive(Clone, Copy, Debug)]
enum DefinitionStart {
    Operation,
    Fragment,
    Schema,
    Type,
    Directive,
    Extension,
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// Generic over the token source, so anything that can produce
/// [`GraphQLToken`]s can be parsed. [`GraphQLParser::new`] covers the usual
/// case of parsing a string.
///
/// A parser is single-use: each `parse_*` entry point consumes it.
///
/// # Usage
///
/// ```
/// use libgraphql_syntax::ast;
/// use libgraphql_syntax::GraphQLParser;
///
/// let source = "type Query { hello: String }";
/// let doc = GraphQLParser::new(source).parse_schema_document().unwrap();
///
/// assert!(matches!(
///     doc.definitions[0],
///     ast::Definition::TypeDefinition(_),
/// ));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Storage for the recursive nodes of the document being built.
    arena: ast::AstArena<'src>,

    options: ParserOptions,

    /// Shared recursion depth counter, incremented on entry to
    /// `parse_value`, `parse_selection_set`, and `parse_type_annotation`;
    /// decremented on exit.
    recursion_depth: usize,

    /// Attached to the error if parsing fails.
    file_path: Option<PathBuf>,

    /// Length of the source text, when parsing from a string.
    source_len: Option<usize>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source, with default
    /// [`ParserOptions`].
    ///
    /// Accepts any type that can be referenced as a `str`,
    /// including `&str`, `&String`, and `&Cow<str>`.
    ///
    /// # Example
    ///
    /// ```
    /// use libgraphql_syntax::GraphQLParser;
    ///
    /// let source = String::from("{ me { id } }");
    /// let doc = GraphQLParser::new(&source).parse_executable_document();
    /// assert!(doc.is_ok());
    /// ```
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Creates a new parser from a string-like source with the given
    /// options.
    pub fn with_options<S: AsRef<str> + ?Sized>(
        source: &'src S,
        options: ParserOptions,
    ) -> Self {
        let source = source.as_ref();
        let token_source = StrGraphQLTokenSource::new(source)
            .with_retained_comments(!options.ignore_comments);
        let mut parser = Self::from_token_source_with_options(token_source, options);
        parser.source_len = Some(source.len());
        parser
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a new parser from a token source, with default
    /// [`ParserOptions`].
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self::from_token_source_with_options(token_source, ParserOptions::default())
    }

    /// Creates a new parser from a token source with the given options.
    ///
    /// `Comment` tokens produced by the source are kept only when
    /// `options.ignore_comments` is `false`.
    pub fn from_token_source_with_options(
        token_source: TTokenSource,
        options: ParserOptions,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            arena: ast::AstArena::default(),
            options,
            recursion_depth: 0,
            file_path: None,
            source_len: None,
        }
    }

    /// Names the file being parsed. A returned error carries the path in
    /// [`GraphQLParseError::file_path()`] and its formatted output.
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    // =========================================================================
    // Token access
    // =========================================================================

    /// Peeks at the next token.
    ///
    /// An `Unknown` token is reported here as a lexical error, so no
    /// production ever has to handle one.
    fn peek(&mut self) -> ParseResult<&GraphQLToken<'src>> {
        let token = self.token_stream.peek()?;
        if let GraphQLTokenKind::Unknown(ch) = token.kind {
            return Err(Self::unexpected_character_error(ch, token.span));
        }
        Ok(token)
    }

    /// Start position of the next token.
    fn peek_start(&mut self) -> ParseResult<SourcePosition> {
        Ok(self.peek()?.span.start_inclusive)
    }

    /// Consumes the next token.
    fn consume(&mut self) -> ParseResult<GraphQLToken<'src>> {
        self.peek()?;
        self.token_stream.consume()
    }

    /// Checks if the next token matches the given kind without consuming.
    ///
    /// Payloads are ignored: any `Name` matches `Name(_)`. A lexical error
    /// reads as "no match" and is reported by whichever call consumes next.
    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        matches!(self.peek(), Ok(token) if Self::token_kinds_match(&token.kind, kind))
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.peek(),
            Ok(GraphQLToken { kind: GraphQLTokenKind::Name(_), .. }),
        )
    }

    fn peek_is_string(&mut self) -> bool {
        matches!(
            self.peek(),
            Ok(GraphQLToken { kind: GraphQLTokenKind::StringValue { .. }, .. }),
        )
    }

    /// Checks if the next token is a specific keyword without consuming.
    ///
    /// Keywords are plain `Name` tokens; `true`, `false`, and `null` are
    /// matched the same way.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        matches!(
            self.peek(),
            Ok(GraphQLToken { kind: GraphQLTokenKind::Name(name), .. })
                if name.as_ref() == keyword,
        )
    }

    fn token_kinds_match(
        actual: &GraphQLTokenKind<'_>,
        expected: &GraphQLTokenKind<'_>,
    ) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Expects a specific (punctuator) token kind and consumes it.
    fn expect(&mut self, expected_kind: &GraphQLTokenKind<'_>) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected_kind) {
            return self.consume();
        }
        let expected = format!("`{}`", expected_kind.display());
        Err(self.unexpected_token_error(&[&expected]))
    }

    /// Expects a name token and returns it as an `ast::Name`.
    fn expect_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if self.peek_is_name() {
            let token = self.consume()?;
            if let GraphQLTokenKind::Name(value) = token.kind {
                return Ok(ast::Name { value, span: token.span });
            }
        }
        Err(self.unexpected_token_error(&["name"]))
    }

    /// Expects a specific keyword (a Name token with specific text).
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is_keyword(keyword) {
            return self.consume();
        }
        let expected = format!("`{keyword}`");
        Err(self.unexpected_token_error(&[&expected]))
    }

    /// Consumes the keyword if it is next. Returns whether it was.
    fn consume_keyword_if_present(&mut self, keyword: &str) -> ParseResult<bool> {
        if self.peek_is_keyword(keyword) {
            self.consume()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the punctuator if it is next. Returns whether it was.
    fn consume_if_present(&mut self, kind: &GraphQLTokenKind<'_>) -> ParseResult<bool> {
        if self.peek_is(kind) {
            self.consume()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Span from `start` to the end of the most recently consumed token.
    fn span_from(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.token_stream.previous_token_end())
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    /// Builds the "expected X, found Y" error for the next token.
    ///
    /// Each entry of `expected` is already formatted for display (e.g.
    /// `` "`:`" `` or `"name"`). If the next token is itself a lexical
    /// error, that error is returned instead.
    fn unexpected_token_error(&mut self, expected: &[&str]) -> GraphQLParseError {
        match self.peek() {
            Ok(token) => Self::unexpected_token(token, expected),
            Err(error) => error,
        }
    }

    fn unexpected_token(token: &GraphQLToken<'src>, expected: &[&str]) -> GraphQLParseError {
        let expected_display = Self::join_expected(expected);
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        if token.is_eof() {
            GraphQLParseError::new(
                format!("expected {expected_display}, found end of input"),
                token.span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            )
        } else {
            let found = token.kind.display();
            GraphQLParseError::new(
                format!("expected {expected_display}, found `{found}`"),
                token.span,
                GraphQLParseErrorKind::UnexpectedToken { expected, found },
            )
        }
    }

    /// `a`, `a or b`, `a, b, or c`
    fn join_expected(expected: &[&str]) -> String {
        match expected {
            [] => String::new(),
            [only] => only.to_string(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }

    fn unexpected_character_error(ch: char, span: GraphQLSourceSpan) -> GraphQLParseError {
        GraphQLParseError::new(
            format!("unexpected character {}", describe_char(ch)),
            span,
            GraphQLParseErrorKind::UnexpectedCharacter(ch),
        )
    }

    // =========================================================================
    // Recursion depth
    // =========================================================================

    /// Checks recursion depth and returns an error if the limit would be
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done (use the wrapper pattern
    /// to guarantee this).
    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= self.options.max_depth {
            let span = self.peek()?.span;
            let max_depth = self.options.max_depth;
            let mut error = GraphQLParseError::new(
                format!("maximum nesting depth of {max_depth} exceeded"),
                span,
                GraphQLParseErrorKind::DepthLimitExceeded { max_depth },
            );
            error.add_help(
                "raise `ParserOptions::max_depth` to accept more deeply nested documents",
            );
            return Err(error);
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Decrements the recursion depth counter.
    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Delimited lists
    // =========================================================================

    /// Parses `open item* close` for the given context, calling
    /// `parse_item` for each item.
    fn parse_delimited<T>(
        &mut self,
        context: DelimiterContext,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let (open_kind, close_kind) = context.delimiters();
        let open = self.expect(&open_kind)?;

        let mut items = Vec::new();
        loop {
            if self.peek_is(&close_kind) {
                break;
            }
            if self.token_stream.is_at_end() {
                return Err(self.unclosed_delimiter_error(&open, &close_kind, context));
            }
            items.push(parse_item(self)?);
        }
        let close = self.consume()?;

        if items.is_empty() && !context.allows_empty() {
            let mut error = GraphQLParseError::new(
                format!("{} cannot be empty", context.description()),
                GraphQLSourceSpan::new(open.span.start_inclusive, close.span.end_exclusive),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: context.description().to_string(),
                },
            );
            if matches!(open_kind, GraphQLTokenKind::ParenOpen) {
                error.add_help("omit the parentheses instead");
            }
            return Err(error);
        }
        Ok(items)
    }

    fn unclosed_delimiter_error(
        &mut self,
        open: &GraphQLToken<'src>,
        close_kind: &GraphQLTokenKind<'_>,
        context: DelimiterContext,
    ) -> GraphQLParseError {
        let open_display = open.kind.display();
        let close_display = close_kind.display();
        let mut error = match self.peek() {
            Ok(eof) => GraphQLParseError::new(
                format!("expected `{close_display}`, found end of input"),
                eof.span,
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: vec![format!("`{close_display}`")],
                },
            ),
            Err(error) => return error,
        };
        error.add_note_with_span(
            format!("opening `{open_display}` of {} here", context.description()),
            open.span,
        );
        error
    }

    // =========================================================================
    // Value parsing
    // =========================================================================

    /// Parses a value (literal or variable reference) into the arena.
    ///
    /// The `context` parameter specifies whether variables are allowed and
    /// provides context for error messages when they're not.
    fn parse_value(&mut self, context: ConstContext) -> ParseResult<ast::ValueId> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        let value = result?;
        Ok(self.arena.alloc_value(value))
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        if self.peek_is(&GraphQLTokenKind::Dollar) {
            self.parse_variable_value(context)
        } else if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            self.parse_list_value(context)
        } else if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_object_value(context)
        } else {
            self.parse_scalar_value()
        }
    }

    /// Parses `$name`, rejecting it in const-only positions.
    fn parse_variable_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        let span = self.span_from(dollar.span.start_inclusive);
        if let Some(position) = context.const_description() {
            let mut error = GraphQLParseError::new(
                format!("variables are not allowed in {position}"),
                span,
                GraphQLParseErrorKind::VariableInConstContext,
            );
            error.add_spec("https://spec.graphql.org/October2021/#sec-Input-Values");
            return Err(error);
        }
        Ok(ast::Value::Variable(ast::VariableValue { name, span }))
    }

    /// Parses an Int, Float, String, Boolean, Null, or Enum value.
    fn parse_scalar_value(&mut self) -> ParseResult<ast::Value<'src>> {
        let is_scalar = matches!(
            self.peek()?.kind,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue { .. }
                | GraphQLTokenKind::Name(_),
        );
        if !is_scalar {
            return Err(self.unexpected_token_error(&["value"]));
        }

        let token = self.consume()?;
        let span = token.span;
        match token.kind {
            GraphQLTokenKind::IntValue(raw) => Ok(ast::Value::Int(ast::IntValue { raw, span })),
            GraphQLTokenKind::FloatValue(raw) => {
                Ok(ast::Value::Float(ast::FloatValue { raw, span }))
            },
            GraphQLTokenKind::StringValue { value, is_block } => {
                Ok(ast::Value::String(ast::StringValue { value, is_block, span }))
            },
            GraphQLTokenKind::Name(name) => Ok(match name.as_ref() {
                "true" => ast::Value::Boolean(ast::BooleanValue { value: true, span }),
                "false" => ast::Value::Boolean(ast::BooleanValue { value: false, span }),
                "null" => ast::Value::Null(ast::NullValue { span }),
                _ => ast::Value::Enum(ast::EnumValue { value: name, span }),
            }),
            kind => Err(Self::unexpected_token(&GraphQLToken::new(kind, span), &["value"])),
        }
    }

    /// Parses a list value: `[value, ...]`
    fn parse_list_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let start = self.peek_start()?;
        let values = self.parse_delimited(DelimiterContext::ListValue, |parser| {
            parser.parse_value(context)
        })?;
        Ok(ast::Value::List(ast::ListValue {
            values,
            span: self.span_from(start),
        }))
    }

    /// Parses an object value: `{ field: value, ... }`
    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        let start = self.peek_start()?;
        let fields = self.parse_delimited(DelimiterContext::ObjectValue, |parser| {
            let name = parser.expect_name()?;
            parser.expect(&GraphQLTokenKind::Colon)?;
            let value = parser.parse_value(context)?;
            Ok(ast::ObjectField {
                span: parser.span_from(name.span.start_inclusive),
                name,
                value,
            })
        })?;
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            span: self.span_from(start),
        }))
    }

    // =========================================================================
    // Type annotation parsing
    // =========================================================================

    /// Parses a type reference: `Name`, `[Type]`, either optionally
    /// followed by `!`.
    fn parse_type_annotation(&mut self) -> ParseResult<ast::TypeAnnotationId> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> ParseResult<ast::TypeAnnotationId> {
        let start = self.peek_start()?;

        let nullable = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            self.consume()?;
            let inner = self.parse_type_annotation()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                inner,
                span: self.span_from(start),
            })
        } else {
            let name = self.expect_name()?;
            ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
                span: name.span,
                name,
            })
        };
        let nullable_id = self.arena.alloc_type_annotation(nullable);

        if !self.peek_is(&GraphQLTokenKind::Bang) {
            return Ok(nullable_id);
        }
        self.consume()?;
        let non_null = ast::TypeAnnotation::NonNull(ast::NonNullTypeAnnotation {
            inner: nullable_id,
            span: self.span_from(start),
        });

        if self.peek_is(&GraphQLTokenKind::Bang) {
            let span = self.peek()?.span;
            let mut error = GraphQLParseError::new(
                "unexpected `!`: a non-null type cannot be made non-null again",
                span,
                GraphQLParseErrorKind::NestedNonNull,
            );
            error.add_help("remove the extra `!`");
            error.add_spec("https://spec.graphql.org/October2021/#sec-Non-Null");
            return Err(error);
        }

        Ok(self.arena.alloc_type_annotation(non_null))
    }

    // =========================================================================
    // Directive annotation parsing
    // =========================================================================

    /// Parses zero or more directive annotations: `@name(args) ...`
    fn parse_directive_annotations(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let at = self.consume()?;
            let name = self.expect_name()?;
            let arguments = self.parse_optional_arguments(context)?;
            directives.push(ast::DirectiveAnnotation {
                span: self.span_from(at.span.start_inclusive),
                name,
                arguments,
            });
        }
        Ok(directives)
    }

    /// Directives in type-system definitions and variable definitions, where
    /// every argument must be constant.
    fn parse_const_directive_annotations(
        &mut self,
    ) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        self.parse_directive_annotations(ConstContext::DirectiveArgument)
    }

    // =========================================================================
    // Argument parsing
    // =========================================================================

    /// Parses `(name: value, ...)` if the next token is `(`.
    fn parse_optional_arguments(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Vec<ast::Argument<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(DelimiterContext::Arguments, |parser| {
            let name = parser.expect_name()?;
            parser.expect(&GraphQLTokenKind::Colon)?;
            let value = parser.parse_value(context)?;
            Ok(ast::Argument {
                span: parser.span_from(name.span.start_inclusive),
                name,
                value,
            })
        })
    }

    // =========================================================================
    // Selection set parsing
    // =========================================================================

    /// Parses a selection set: `{ selection... }`
    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSetId> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<ast::SelectionSetId> {
        let start = self.peek_start()?;
        let selections =
            self.parse_delimited(DelimiterContext::SelectionSet, Self::parse_selection)?;
        let selection_set = ast::SelectionSet {
            span: self.span_from(start),
            selections,
        };
        Ok(self.arena.alloc_selection_set(selection_set))
    }

    /// Parses a single selection (field, fragment spread, or inline fragment).
    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return self.parse_field().map(ast::Selection::Field);
        }

        let ellipsis = self.consume()?;
        let start = ellipsis.span.start_inclusive;
        if self.peek_is_keyword("on")
            || self.peek_is(&GraphQLTokenKind::At)
            || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            self.parse_inline_fragment(start).map(ast::Selection::InlineFragment)
        } else {
            self.parse_fragment_spread(start).map(ast::Selection::FragmentSpread)
        }
    }

    /// Parses a field: `alias: name(args) @directives { selections }`
    fn parse_field(&mut self) -> ParseResult<ast::Field<'src>> {
        let first_name = self.expect_name()?;
        let start = first_name.span.start_inclusive;

        let (alias, name) = if self.consume_if_present(&GraphQLTokenKind::Colon)? {
            (Some(first_name), self.expect_name()?)
        } else {
            (None, first_name)
        };

        let arguments = self.parse_optional_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            span: self.span_from(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses a fragment spread: `...FragmentName @directives`
    /// (called after consuming `...`)
    fn parse_fragment_spread(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::FragmentSpread<'src>> {
        let name = self.expect_name()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        Ok(ast::FragmentSpread {
            span: self.span_from(start),
            name,
            directives,
        })
    }

    /// Parses an inline fragment: `... on Type @directives { selections }`
    /// or `... @directives { selections }` (called after consuming `...`)
    fn parse_inline_fragment(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::InlineFragment<'src>> {
        let type_condition = if self.peek_is_keyword("on") {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::InlineFragment {
            span: self.span_from(start),
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Operation parsing
    // =========================================================================

    /// Parses an operation definition, including the `{ ... }` shorthand.
    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition<'src>> {
        let start = self.peek_start()?;

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                span: self.span_from(start),
                operation_kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                is_shorthand: true,
            });
        }

        let operation_kind = self.parse_operation_kind()?;
        let name = if self.peek_is_name() {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_delimited(
                DelimiterContext::VariableDefinitions,
                Self::parse_variable_definition,
            )?
        } else {
            Vec::new()
        };
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            span: self.span_from(start),
            operation_kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            is_shorthand: false,
        })
    }

    /// Consumes `query`, `mutation`, or `subscription`.
    fn parse_operation_kind(&mut self) -> ParseResult<ast::OperationKind> {
        let operation_kind = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => ast::OperationKind::from_keyword(name),
            _ => None,
        };
        match operation_kind {
            Some(operation_kind) => {
                self.consume()?;
                Ok(operation_kind)
            },
            None => Err(self.unexpected_token_error(&["`query`", "`mutation`", "`subscription`"])),
        }
    }

    /// Parses a single variable definition: `$name: Type = default @directives`
    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let variable = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value = if self.consume_if_present(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_const_directive_annotations()?;

        Ok(ast::VariableDefinition {
            span: self.span_from(dollar.span.start_inclusive),
            variable,
            var_type,
            default_value,
            directives,
        })
    }

    // =========================================================================
    // Fragment parsing
    // =========================================================================

    /// Parses a fragment definition: `fragment Name on Type @directives {
    /// ... }`
    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition<'src>> {
        let fragment = self.expect_keyword("fragment")?;

        let name = self.expect_name()?;
        if name.as_str() == "on" {
            let context = ReservedNameContext::FragmentName;
            let mut error = GraphQLParseError::new(
                format!("{} cannot be `on`", context.description()),
                name.span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#FragmentName");
            return Err(error);
        }

        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            span: self.span_from(fragment.span.start_inclusive),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses a type condition: `on TypeName`
    fn parse_type_condition(&mut self) -> ParseResult<ast::TypeCondition<'src>> {
        let on = self.expect_keyword("on")?;
        let named_type = self.expect_name()?;
        Ok(ast::TypeCondition {
            span: self.span_from(on.span.start_inclusive),
            named_type,
        })
    }

    // =========================================================================
    // Type definition parsing
    // =========================================================================

    /// Parses an optional description (string before a definition).
    fn parse_description(&mut self) -> ParseResult<Option<ast::StringValue<'src>>> {
        if !self.peek_is_string() {
            return Ok(None);
        }
        let token = self.consume()?;
        match token.kind {
            GraphQLTokenKind::StringValue { value, is_block } => Ok(Some(ast::StringValue {
                value,
                is_block,
                span: token.span,
            })),
            kind => Err(Self::unexpected_token(&GraphQLToken::new(kind, token.span), &["string"])),
        }
    }

    /// Parses a schema definition: `schema @directives { query: Query, ... }`
    fn parse_schema_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::SchemaDefinition<'src>> {
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directive_annotations()?;
        let root_operation_types = self.parse_delimited(
            DelimiterContext::RootOperationTypes,
            Self::parse_root_operation_type_definition,
        )?;
        Ok(ast::SchemaDefinition {
            span: self.span_from(start),
            description,
            directives,
            root_operation_types,
        })
    }

    /// Parses `query: TypeName` inside a schema definition or extension.
    fn parse_root_operation_type_definition(
        &mut self,
    ) -> ParseResult<ast::RootOperationTypeDefinition<'src>> {
        let start = self.peek_start()?;
        let unknown_operation = match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) if ast::OperationKind::from_keyword(name).is_none() => {
                Some(name.to_string())
            },
            _ => None,
        };
        if let Some(name) = unknown_operation {
            let span = self.peek()?.span;
            return Err(GraphQLParseError::new(
                format!(
                    "unknown operation type `{name}`; expected `query`, `mutation`, or \
                    `subscription`"
                ),
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        let operation_kind = self.parse_operation_kind()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.expect_name()?;
        Ok(ast::RootOperationTypeDefinition {
            span: self.span_from(start),
            operation_kind,
            named_type,
        })
    }

    /// Parses a scalar type definition: `scalar Name @directives`
    fn parse_scalar_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::ScalarTypeDefinition<'src>> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        Ok(ast::ScalarTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            directives,
        })
    }

    /// Parses an object type definition:
    /// `type Name implements I & J @directives { fields }`
    fn parse_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::ObjectTypeDefinition<'src>> {
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    /// Parses an interface type definition:
    /// `interface Name implements I @directives { fields }`
    fn parse_interface_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::InterfaceTypeDefinition<'src>> {
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            implements,
            directives,
            fields,
        })
    }

    /// Parses a union type definition: `union Name @directives = A | B`
    fn parse_union_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::UnionTypeDefinition<'src>> {
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let members = self.parse_optional_union_members()?;
        Ok(ast::UnionTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            directives,
            members,
        })
    }

    /// Parses an enum type definition: `enum Name @directives { VALUES }`
    fn parse_enum_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::EnumTypeDefinition<'src>> {
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let values = self.parse_optional_enum_values_definition()?;
        Ok(ast::EnumTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            directives,
            values,
        })
    }

    /// Parses an input object type definition:
    /// `input Name @directives { fields }`
    fn parse_input_object_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::InputObjectTypeDefinition<'src>> {
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_input_fields_definition()?;
        Ok(ast::InputObjectTypeDefinition {
            span: self.span_from(start),
            description,
            name,
            directives,
            fields,
        })
    }

    /// Parses a directive definition:
    /// `directive @name(args) repeatable on LOCATION | ...`
    fn parse_directive_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::DirectiveDefinition<'src>> {
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        let repeatable = self.consume_keyword_if_present("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            span: self.span_from(start),
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    /// Parses `implements A & B` (a leading `&` is allowed), or nothing.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<ast::Name<'src>>> {
        if !self.consume_keyword_if_present("implements")? {
            return Ok(Vec::new());
        }
        self.consume_if_present(&GraphQLTokenKind::Ampersand)?;
        let mut interfaces = vec![self.expect_name()?];
        while self.consume_if_present(&GraphQLTokenKind::Ampersand)? {
            interfaces.push(self.expect_name()?);
        }
        Ok(interfaces)
    }

    /// Parses `= A | B` (a leading `|` is allowed), or nothing.
    fn parse_optional_union_members(&mut self) -> ParseResult<Vec<ast::Name<'src>>> {
        if !self.consume_if_present(&GraphQLTokenKind::Equals)? {
            return Ok(Vec::new());
        }
        self.consume_if_present(&GraphQLTokenKind::Pipe)?;
        let mut members = vec![self.expect_name()?];
        while self.consume_if_present(&GraphQLTokenKind::Pipe)? {
            members.push(self.expect_name()?);
        }
        Ok(members)
    }

    fn parse_optional_fields_definition(
        &mut self,
    ) -> ParseResult<Vec<ast::FieldDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(DelimiterContext::FieldsDefinition, Self::parse_field_definition)
    }

    /// Parses a field definition: `"desc" name(args): Type @directives`
    fn parse_field_definition(&mut self) -> ParseResult<ast::FieldDefinition<'src>> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_const_directive_annotations()?;
        Ok(ast::FieldDefinition {
            span: self.span_from(start),
            description,
            name,
            arguments,
            field_type,
            directives,
        })
    }

    fn parse_optional_arguments_definition(
        &mut self,
    ) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(
            DelimiterContext::ArgumentsDefinition,
            Self::parse_input_value_definition,
        )
    }

    fn parse_optional_input_fields_definition(
        &mut self,
    ) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(
            DelimiterContext::InputFieldsDefinition,
            Self::parse_input_value_definition,
        )
    }

    /// Parses an input value definition (argument or input field):
    /// `"desc" name: Type = default @directives`
    fn parse_input_value_definition(&mut self) -> ParseResult<ast::InputValueDefinition<'src>> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.consume_if_present(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_const_directive_annotations()?;
        Ok(ast::InputValueDefinition {
            span: self.span_from(start),
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    fn parse_optional_enum_values_definition(
        &mut self,
    ) -> ParseResult<Vec<ast::EnumValueDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(Vec::new());
        }
        self.parse_delimited(
            DelimiterContext::EnumValuesDefinition,
            Self::parse_enum_value_definition,
        )
    }

    /// Parses an enum value definition: `"desc" VALUE @directives`
    fn parse_enum_value_definition(&mut self) -> ParseResult<ast::EnumValueDefinition<'src>> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        if matches!(name.as_str(), "true" | "false" | "null") {
            let context = ReservedNameContext::EnumValue;
            let mut error = GraphQLParseError::new(
                format!("{} cannot be `{}`", context.description(), name.as_str()),
                name.span,
                GraphQLParseErrorKind::ReservedName {
                    name: name.as_str().to_string(),
                    context,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#EnumValue");
            return Err(error);
        }
        let directives = self.parse_const_directive_annotations()?;
        Ok(ast::EnumValueDefinition {
            span: self.span_from(start),
            description,
            name,
            directives,
        })
    }

    /// Parses directive locations: `| FIELD | OBJECT | ...`
    fn parse_directive_locations(&mut self) -> ParseResult<Vec<ast::DirectiveLocation>> {
        self.consume_if_present(&GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.consume_if_present(&GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    /// Parses a single directive location.
    fn parse_directive_location(&mut self) -> ParseResult<ast::DirectiveLocation> {
        let name = self.expect_name()?;
        if let Some(kind) = DirectiveLocationKind::from_name(name.as_str()) {
            return Ok(ast::DirectiveLocation { kind, span: name.span });
        }

        let mut error = GraphQLParseError::new(
            format!("unknown directive location: {}", name.as_str()),
            name.span,
            GraphQLParseErrorKind::UnknownDirectiveLocation {
                name: name.as_str().to_string(),
            },
        );
        if let Some(suggestion) = Self::suggest_directive_location(name.as_str()) {
            error.add_help(format!("did you mean `{suggestion}`?"));
        }
        error.add_spec("https://spec.graphql.org/October2021/#DirectiveLocations");
        Err(error)
    }

    /// Suggests the closest directive location for a typo.
    fn suggest_directive_location(input: &str) -> Option<&'static str> {
        let input_upper = input.to_uppercase();
        DirectiveLocationKind::all_names()
            .map(|location| (strsim::levenshtein(&input_upper, location), location))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, location)| location)
    }

    // =========================================================================
    // Type extension parsing
    // =========================================================================

    /// Parses an `extend ...` definition.
    fn parse_extension(&mut self) -> ParseResult<ast::Definition<'src>> {
        let extend = self.expect_keyword("extend")?;
        let start = extend.span.start_inclusive;

        if !self.options.allow_extensions {
            let mut error = GraphQLParseError::new(
                "type system extensions are disabled",
                extend.span,
                GraphQLParseErrorKind::ExtensionsDisabled,
            );
            error.add_help("set `ParserOptions::allow_extensions` to accept `extend` definitions");
            return Err(error);
        }

        if self.peek_is_keyword("schema") {
            self.parse_schema_extension(start).map(ast::Definition::SchemaExtension)
        } else if self.peek_is_keyword("scalar") {
            self.parse_scalar_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Scalar(e)))
        } else if self.peek_is_keyword("type") {
            self.parse_object_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Object(e)))
        } else if self.peek_is_keyword("interface") {
            self.parse_interface_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Interface(e)))
        } else if self.peek_is_keyword("union") {
            self.parse_union_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Union(e)))
        } else if self.peek_is_keyword("enum") {
            self.parse_enum_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Enum(e)))
        } else if self.peek_is_keyword("input") {
            self.parse_input_object_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::InputObject(e)))
        } else {
            Err(self.unexpected_token_error(&[
                "`schema`",
                "`scalar`",
                "`type`",
                "`interface`",
                "`union`",
                "`enum`",
                "`input`",
            ]))
        }
    }

    /// Parses `extend schema @directives { query: Query }` (after `extend`).
    fn parse_schema_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::SchemaExtension<'src>> {
        self.expect_keyword("schema")?;
        let directives = self.parse_const_directive_annotations()?;
        let root_operation_types = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_delimited(
                DelimiterContext::RootOperationTypes,
                Self::parse_root_operation_type_definition,
            )?
        } else if directives.is_empty() {
            return Err(self.unexpected_token_error(&["directives", "`{`"]));
        } else {
            Vec::new()
        };
        Ok(ast::SchemaExtension {
            span: self.span_from(start),
            directives,
            root_operation_types,
        })
    }

    /// Parses a scalar type extension: `extend scalar Name @directives`
    fn parse_scalar_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::ScalarTypeExtension<'src>> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        if directives.is_empty() {
            return Err(self.unexpected_token_error(&["directives"]));
        }
        Ok(ast::ScalarTypeExtension {
            span: self.span_from(start),
            name,
            directives,
        })
    }

    fn parse_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::ObjectTypeExtension<'src>> {
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;
        if implements.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_token_error(&["`implements`", "directives", "`{`"]));
        }
        Ok(ast::ObjectTypeExtension {
            span: self.span_from(start),
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::InterfaceTypeExtension<'src>> {
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_fields_definition()?;
        if implements.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_token_error(&["`implements`", "directives", "`{`"]));
        }
        Ok(ast::InterfaceTypeExtension {
            span: self.span_from(start),
            name,
            implements,
            directives,
            fields,
        })
    }

    fn parse_union_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::UnionTypeExtension<'src>> {
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let members = self.parse_optional_union_members()?;
        if directives.is_empty() && members.is_empty() {
            return Err(self.unexpected_token_error(&["directives", "`=`"]));
        }
        Ok(ast::UnionTypeExtension {
            span: self.span_from(start),
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::EnumTypeExtension<'src>> {
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let values = self.parse_optional_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected_token_error(&["directives", "`{`"]));
        }
        Ok(ast::EnumTypeExtension {
            span: self.span_from(start),
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> ParseResult<ast::InputObjectTypeExtension<'src>> {
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_const_directive_annotations()?;
        let fields = self.parse_optional_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_token_error(&["directives", "`{`"]));
        }
        Ok(ast::InputObjectTypeExtension {
            span: self.span_from(start),
            name,
            directives,
            fields,
        })
    }

    // =========================================================================
    // Document parsing (public API)
    // =========================================================================

    /// Parses a document that may mix executable and type-system
    /// definitions.
    pub fn parse_document(self) -> Result<ast::Document<'src>, GraphQLParseError> {
        self.parse_document_of_kind(DocumentKind::Mixed)
    }

    /// Parses an executable document (operations and fragments only).
    pub fn parse_executable_document(self) -> Result<ast::Document<'src>, GraphQLParseError> {
        self.parse_document_of_kind(DocumentKind::Executable)
    }

    /// Parses a schema document (type system definitions and extensions
    /// only).
    pub fn parse_schema_document(self) -> Result<ast::Document<'src>, GraphQLParseError> {
        self.parse_document_of_kind(DocumentKind::Schema)
    }

    fn parse_document_of_kind(
        mut self,
        document_kind: DocumentKind,
    ) -> Result<ast::Document<'src>, GraphQLParseError> {
        match self.source_len {
            Some(len) => log::debug!(
                "parsing {} ({len} bytes of source)",
                document_kind.description(),
            ),
            None => log::debug!("parsing {} from token source", document_kind.description()),
        }

        match self.parse_definitions(document_kind) {
            Ok((definitions, span)) => {
                log::debug!("parsed {} definition(s)", definitions.len());
                let comments = self.take_comments();
                Ok(ast::Document::new(definitions, comments, span, self.arena))
            },
            Err(mut error) => {
                log::debug!(
                    "{} at line {} column {}: {}",
                    error.category(),
                    error.line(),
                    error.column(),
                    error.message(),
                );
                if let Some(file_path) = self.file_path.take() {
                    error.set_file_path(file_path);
                }
                Err(error)
            },
        }
    }

    /// Parses definitions until end of input. A document needs at least one.
    fn parse_definitions(
        &mut self,
        document_kind: DocumentKind,
    ) -> ParseResult<(Vec<ast::Definition<'src>>, GraphQLSourceSpan)> {
        let start = self.peek_start()?;
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition(document_kind)?);
        }
        if definitions.is_empty() {
            return Err(self.unexpected_token_error(&["definition"]));
        }
        Ok((definitions, self.span_from(start)))
    }

    /// Parses one top-level definition, including its description.
    fn parse_definition(
        &mut self,
        document_kind: DocumentKind,
    ) -> ParseResult<ast::Definition<'src>> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;

        let Some(definition_start) = self.peek_definition_start()? else {
            return Err(self.unexpected_token_error(&["definition"]));
        };

        let definition_kind = self.definition_kind(definition_start)?;
        if !document_kind.allows(definition_kind) {
            let span = self.peek()?.span;
            let mut error = GraphQLParseError::new(
                format!(
                    "{} not allowed in {}",
                    definition_kind.description(),
                    document_kind.description(),
                ),
                span,
                GraphQLParseErrorKind::WrongDocumentKind {
                    found: definition_kind,
                    document_kind,
                },
            );
            if document_kind == DocumentKind::Executable {
                error.add_note("executable documents may only contain operations and fragments");
            } else {
                error.add_note(
                    "schema documents may only contain type system definitions and extensions",
                );
            }
            return Err(error);
        }

        let allows_description = matches!(
            definition_start,
            DefinitionStart::Schema | DefinitionStart::Type | DefinitionStart::Directive,
        );
        if let (Some(description), false) = (&description, allows_description) {
            let mut error = GraphQLParseError::new(
                "unexpected description",
                description.span,
                GraphQLParseErrorKind::UnexpectedDescription,
            );
            error.add_help(
                "descriptions may only precede type system definitions, not operations, \
                fragments, or extensions",
            );
            return Err(error);
        }

        match definition_start {
            DefinitionStart::Operation => self
                .parse_operation_definition()
                .map(ast::Definition::OperationDefinition),
            DefinitionStart::Fragment => self
                .parse_fragment_definition()
                .map(ast::Definition::FragmentDefinition),
            DefinitionStart::Schema => self
                .parse_schema_definition(description, start)
                .map(ast::Definition::SchemaDefinition),
            DefinitionStart::Type => self
                .parse_type_definition(description, start)
                .map(ast::Definition::TypeDefinition),
            DefinitionStart::Directive => self
                .parse_directive_definition(description, start)
                .map(ast::Definition::DirectiveDefinition),
            DefinitionStart::Extension => self.parse_extension(),
        }
    }

    /// Parses `scalar`, `type`, `interface`, `union`, `enum`, or `input`.
    fn parse_type_definition(
        &mut self,
        description: Option<ast::StringValue<'src>>,
        start: SourcePosition,
    ) -> ParseResult<ast::TypeDefinition<'src>> {
        if self.peek_is_keyword("scalar") {
            self.parse_scalar_type_definition(description, start)
                .map(ast::TypeDefinition::Scalar)
        } else if self.peek_is_keyword("type") {
            self.parse_object_type_definition(description, start)
                .map(ast::TypeDefinition::Object)
        } else if self.peek_is_keyword("interface") {
            self.parse_interface_type_definition(description, start)
                .map(ast::TypeDefinition::Interface)
        } else if self.peek_is_keyword("union") {
            self.parse_union_type_definition(description, start)
                .map(ast::TypeDefinition::Union)
        } else if self.peek_is_keyword("enum") {
            self.parse_enum_type_definition(description, start)
                .map(ast::TypeDefinition::Enum)
        } else {
            self.parse_input_object_type_definition(description, start)
                .map(ast::TypeDefinition::InputObject)
        }
    }

    /// Classifies the next token as the start of a definition, or `None`
    /// if no definition starts with it.
    fn peek_definition_start(&mut self) -> ParseResult<Option<DefinitionStart>> {
        let definition_start = match &self.peek()?.kind {
            GraphQLTokenKind::CurlyBraceOpen => Some(DefinitionStart::Operation),
            GraphQLTokenKind::Name(keyword) => match keyword.as_ref() {
                "query" | "mutation" | "subscription" => Some(DefinitionStart::Operation),
                "fragment" => Some(DefinitionStart::Fragment),
                "schema" => Some(DefinitionStart::Schema),
                "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                    Some(DefinitionStart::Type)
                },
                "directive" => Some(DefinitionStart::Directive),
                "extend" => Some(DefinitionStart::Extension),
                _ => None,
            },
            _ => None,
        };
        Ok(definition_start)
    }

    fn definition_kind(&mut self, definition_start: DefinitionStart) -> ParseResult<DefinitionKind> {
        Ok(match definition_start {
            DefinitionStart::Operation => DefinitionKind::Operation,
            DefinitionStart::Fragment => DefinitionKind::Fragment,
            DefinitionStart::Schema => DefinitionKind::Schema,
            DefinitionStart::Type => DefinitionKind::TypeDefinition,
            DefinitionStart::Directive => DefinitionKind::DirectiveDefinition,
            DefinitionStart::Extension => {
                let extends_schema = matches!(
                    &self.token_stream.peek_nth(1)?.kind,
                    GraphQLTokenKind::Name(keyword) if keyword.as_ref() == "schema",
                );
                if extends_schema {
                    DefinitionKind::Schema
                } else {
                    DefinitionKind::TypeDefinition
                }
            },
        })
    }

    /// Collects comments seen by the token stream, or drops them if the
    /// options ignore comments.
    fn take_comments(&mut self) -> Vec<ast::Comment<'src>> {
        let tokens = self.token_stream.take_comments();
        if self.options.ignore_comments {
            return Vec::new();
        }
        tokens
            .into_iter()
            .filter_map(|token| match token.kind {
                GraphQLTokenKind::Comment(value) => Some(ast::Comment {
                    value,
                    span: token.span,
                }),
                _ => None,
            })
            .collect()
    }
}
