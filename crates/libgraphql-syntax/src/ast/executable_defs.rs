use crate::ast::ast_node::impl_ast_node_via_span_field;
use crate::ast::AstNode;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSetId;
use crate::ast::TypeAnnotationId;
use crate::ast::TypeCondition;
use crate::ast::ValueId;
use crate::GraphQLSourceSpan;
use inherent::inherent;

// =========================================================
// Operations
// =========================================================

/// The kind of an operation (or of a root operation type in a
/// schema definition).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Looks up the operation kind spelled by `keyword`
    /// (`query`, `mutation`, or `subscription`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// An operation definition (query, mutation, or
/// subscription).
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the spec.
///
/// A shorthand query (`{ field }`) has `is_shorthand == true`,
/// `operation_kind == Query`, no name, no variables, and no
/// directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub operation_kind: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSetId,
    pub is_shorthand: bool,
}

/// A variable definition (e.g. `$id: ID! = "1" @deprecated`).
///
/// `variable` is the name without the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub variable: Name<'src>,
    pub var_type: TypeAnnotationId,
    pub default_value: Option<ValueId>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

// =========================================================
// Fragments
// =========================================================

/// A named fragment definition.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSetId,
}

// =========================================================
// Selections
// =========================================================

/// A `{ ... }` block of one or more selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub span: GraphQLSourceSpan,
    pub selections: Vec<Selection<'src>>,
}

/// A single selection within a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection, optionally aliased (`alias: name`).
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub span: GraphQLSourceSpan,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSetId>,
}

impl Field<'_> {
    /// The key this field's result is returned under: the alias
    /// if present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// A named fragment spread (`...FragmentName`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub span: GraphQLSourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// An inline fragment (`... on Type { ... }` or `... { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSetId,
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Selection::Field(s) => s.span,
            Selection::FragmentSpread(s) => s.span,
            Selection::InlineFragment(s) => s.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_ast_node_via_span_field!(
    OperationDefinition<'_>,
    VariableDefinition<'_>,
    FragmentDefinition<'_>,
    SelectionSet<'_>,
    Field<'_>,
    FragmentSpread<'_>,
    InlineFragment<'_>,
);
