use std::borrow::Cow;

use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::StringValue;
use crate::ast::TypeAnnotationId;
use crate::ast::ValueId;
use crate::GraphQLSourceSpan;

// =========================================================
// Names
// =========================================================

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier).
///
/// `value` borrows from the source text until the document is
/// detached with [`Document::into_static`](crate::ast::Document::into_static).
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// =========================================================
// Comments
// =========================================================

/// A `#` comment, kept when the parser is configured not to
/// ignore comments.
///
/// `value` excludes the leading `#` and the line terminator.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Field definitions (used in object types, interfaces)
// =========================================================

/// `"description" name(arguments): Type @directives` inside an object or
/// interface type. `field_type` indexes the owning document's arena.
///
/// See
/// [Field Definitions](https://spec.graphql.org/October2021/#FieldsDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: TypeAnnotationId,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Input value definitions (arguments, input fields)
// =========================================================

/// A field argument, directive argument, or input object field:
/// `"description" name: Type = default @directives`.
///
/// The default value is const; the parser rejects variables in it.
///
/// See
/// [Input Values Definitions](https://spec.graphql.org/October2021/#InputValueDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: TypeAnnotationId,
    pub default_value: Option<ValueId>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Enum value definitions
// =========================================================

/// One value of an enum type. The name is never `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Directive annotations (applied directives)
// =========================================================

/// An applied directive such as `@deprecated(reason: "Use newField")`.
/// Definitions of directives are
/// [`DirectiveDefinition`](crate::ast::DirectiveDefinition)s.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}

// =========================================================
// Arguments
// =========================================================

/// `name: value` in a field selection or directive annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub value: ValueId,
}

// =========================================================
// Type condition
// =========================================================

/// `on User` in a fragment definition or inline fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub span: GraphQLSourceSpan,
    pub named_type: Name<'src>,
}

impl_ast_node_via_span_field!(
    Name<'_>,
    Comment<'_>,
    FieldDefinition<'_>,
    InputValueDefinition<'_>,
    EnumValueDefinition<'_>,
    DirectiveAnnotation<'_>,
    Argument<'_>,
    TypeCondition<'_>,
);
