use std::borrow::Cow;

use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::ValueId;
use crate::GraphQLSourceSpan;
use crate::ValueParsingError;
use inherent::inherent;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined
/// in the
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// section of the spec.
///
/// Lists and objects refer to their elements by [`ValueId`]; resolve
/// them through the owning [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(VariableValue<'src>),
}

impl Value<'_> {
    /// `true` if this value is a `$variable` reference.
    ///
    /// Only the top level is inspected; a list or object containing
    /// variables returns `false`.
    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(_))
    }
}

// =========================================================
// Scalar value types
// =========================================================

/// A GraphQL integer literal.
///
/// The raw source text is kept as written (including a leading
/// `-`). Per the
/// [Int Value](https://spec.graphql.org/October2021/#sec-Int-Value)
/// section of the spec, Int is a signed 32-bit integer; use
/// [`to_i32()`](Self::to_i32) for a checked conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl IntValue<'_> {
    /// Parses the literal as a 32-bit signed integer.
    pub fn to_i32(&self) -> Result<i32, ValueParsingError> {
        self.raw
            .parse::<i32>()
            .map_err(|_| ValueParsingError::Int(self.raw.to_string()))
    }

    /// Parses the literal as an `i64`, for callers that accept values
    /// outside the GraphQL `Int` range.
    pub fn to_i64(&self) -> Result<i64, ValueParsingError> {
        self.raw
            .parse::<i64>()
            .map_err(|_| ValueParsingError::Int(self.raw.to_string()))
    }
}

/// A GraphQL float literal.
///
/// The raw source text is kept as written. Per the
/// [Float Value](https://spec.graphql.org/October2021/#sec-Float-Value)
/// section of the spec, Float is a double-precision
/// floating-point value (IEEE 754); use [`to_f64()`](Self::to_f64).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl FloatValue<'_> {
    /// Parses the literal as an `f64`.
    ///
    /// Literals too large for an `f64` (which would round to
    /// infinity) are rejected.
    pub fn to_f64(&self) -> Result<f64, ValueParsingError> {
        match self.raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ValueParsingError::Float(self.raw.to_string())),
        }
    }
}

/// A GraphQL string value.
///
/// Per the
/// [String Value](https://spec.graphql.org/October2021/#sec-String-Value)
/// section of the spec, string values may be quoted strings
/// or block strings. `value` is the processed string after
/// escape-sequence resolution and block-string indentation
/// stripping. Borrows from source when no transformation was
/// needed.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub is_block: bool,
    pub span: GraphQLSourceSpan,
}

/// A GraphQL boolean value (`true` or `false`).
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: GraphQLSourceSpan,
}

/// A GraphQL null literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

/// A GraphQL enum value literal (an unquoted name other
/// than `true`, `false`, or `null`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

/// A variable reference (e.g. `$id`).
///
/// `name` excludes the `$`; `span` includes it.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

// =========================================================
// Composite value types
// =========================================================

/// A list value (e.g. `[1, 2, 3]`).
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<ValueId>,
    pub span: GraphQLSourceSpan,
}

/// An input object value (e.g. `{ x: 1, y: 2 }`).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: GraphQLSourceSpan,
}

/// A single `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: ValueId,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Value::Boolean(v) => v.span,
            Value::Enum(v) => v.span,
            Value::Float(v) => v.span,
            Value::Int(v) => v.span,
            Value::List(v) => v.span,
            Value::Null(v) => v.span,
            Value::Object(v) => v.span,
            Value::String(v) => v.span,
            Value::Variable(v) => v.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_ast_node_via_span_field!(
    IntValue<'_>,
    FloatValue<'_>,
    StringValue<'_>,
    BooleanValue,
    NullValue,
    EnumValue<'_>,
    VariableValue<'_>,
    ListValue,
    ObjectValue<'_>,
    ObjectField<'_>,
);
