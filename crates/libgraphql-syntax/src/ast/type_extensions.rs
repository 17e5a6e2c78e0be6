use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::RootOperationTypeDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

// =========================================================
// Schema extension
// =========================================================

/// An `extend schema ...` definition.
///
/// See
/// [Schema Extension](https://spec.graphql.org/October2021/#sec-Schema-Extension)
/// in the spec. At least one of `directives` and
/// `root_operation_types` is non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
}

// =========================================================
// Type extensions
// =========================================================

/// An `extend <type kind> Name ...` definition.
///
/// Extensions carry no description. Each one adds at least one
/// directive, interface, field, member, or value.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Scalar(ScalarTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    /// The name of the extended type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeExtension::Enum(e) => &e.name,
            TypeExtension::InputObject(e) => &e.name,
            TypeExtension::Interface(e) => &e.name,
            TypeExtension::Object(e) => &e.name,
            TypeExtension::Scalar(e) => &e.name,
            TypeExtension::Union(e) => &e.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

#[inherent]
impl AstNode for TypeExtension<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeExtension::Enum(e) => e.span,
            TypeExtension::InputObject(e) => e.span,
            TypeExtension::Interface(e) => e.span,
            TypeExtension::Object(e) => e.span,
            TypeExtension::Scalar(e) => e.span,
            TypeExtension::Union(e) => e.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_ast_node_via_span_field!(
    SchemaExtension<'_>,
    ScalarTypeExtension<'_>,
    ObjectTypeExtension<'_>,
    InterfaceTypeExtension<'_>,
    UnionTypeExtension<'_>,
    EnumTypeExtension<'_>,
    InputObjectTypeExtension<'_>,
);
