use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::TypeAnnotationId;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A reference to a type, as written in a variable definition, field
/// definition, or input value definition.
///
/// See
/// [Type References](https://spec.graphql.org/October2021/#sec-Type-References).
///
/// `NonNull` never wraps another `NonNull`; the parser rejects `Type!!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    Named(NamedTypeAnnotation<'src>),
    List(ListTypeAnnotation),
    NonNull(NonNullTypeAnnotation),
}

impl TypeAnnotation<'_> {
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

/// A bare type name (e.g. `String`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

/// A list type (e.g. `[String]`).
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub inner: TypeAnnotationId,
    pub span: GraphQLSourceSpan,
}

/// A non-null type (e.g. `String!`, `[Int]!`). `inner` is always a
/// `Named` or `List` annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullTypeAnnotation {
    pub inner: TypeAnnotationId,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeAnnotation::Named(t) => t.span,
            TypeAnnotation::List(t) => t.span,
            TypeAnnotation::NonNull(t) => t.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_ast_node_via_span_field!(
    NamedTypeAnnotation<'_>,
    ListTypeAnnotation,
    NonNullTypeAnnotation,
);
