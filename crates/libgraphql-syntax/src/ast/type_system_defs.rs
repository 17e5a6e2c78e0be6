use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveLocation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::GraphQLSourceSpan;
use inherent::inherent;

// =========================================================
// Schema definition
// =========================================================

/// A `schema { query: Query ... }` definition.
///
/// See
/// [Schema](https://spec.graphql.org/October2021/#sec-Schema)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
}

/// One `operation: NamedType` entry of a schema definition or
/// extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub operation_kind: OperationKind,
    pub named_type: Name<'src>,
}

// =========================================================
// Type definitions
// =========================================================

/// A named type definition.
///
/// See
/// [Types](https://spec.graphql.org/October2021/#sec-Types)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    /// The name of the defined type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeDefinition::Enum(d) => &d.name,
            TypeDefinition::InputObject(d) => &d.name,
            TypeDefinition::Interface(d) => &d.name,
            TypeDefinition::Object(d) => &d.name,
            TypeDefinition::Scalar(d) => &d.name,
            TypeDefinition::Union(d) => &d.name,
        }
    }

    pub fn description(&self) -> Option<&StringValue<'src>> {
        match self {
            TypeDefinition::Enum(d) => d.description.as_ref(),
            TypeDefinition::InputObject(d) => d.description.as_ref(),
            TypeDefinition::Interface(d) => d.description.as_ref(),
            TypeDefinition::Object(d) => d.description.as_ref(),
            TypeDefinition::Scalar(d) => d.description.as_ref(),
            TypeDefinition::Union(d) => d.description.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

// =========================================================
// Directive definitions
// =========================================================

/// A `directive @name(args) repeatable on LOCATIONS` definition.
///
/// `locations` preserves source order, duplicates included.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

#[inherent]
impl AstNode for TypeDefinition<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeDefinition::Enum(d) => d.span,
            TypeDefinition::InputObject(d) => d.span,
            TypeDefinition::Interface(d) => d.span,
            TypeDefinition::Object(d) => d.span,
            TypeDefinition::Scalar(d) => d.span,
            TypeDefinition::Union(d) => d.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_ast_node_via_span_field!(
    SchemaDefinition<'_>,
    RootOperationTypeDefinition<'_>,
    ScalarTypeDefinition<'_>,
    ObjectTypeDefinition<'_>,
    InterfaceTypeDefinition<'_>,
    UnionTypeDefinition<'_>,
    EnumTypeDefinition<'_>,
    InputObjectTypeDefinition<'_>,
    DirectiveDefinition<'_>,
);
