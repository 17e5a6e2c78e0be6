use std::ops::Index;

use crate::ast::into_static::IntoStatic;
use crate::ast::AstArena;
use crate::ast::AstNode;
use crate::ast::Comment;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::SelectionSet;
use crate::ast::SelectionSetId;
use crate::ast::TypeAnnotation;
use crate::ast::TypeAnnotationId;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::Value;
use crate::ast::ValueId;
use crate::DefinitionKind;
use crate::GraphQLSourceSpan;
use inherent::inherent;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document, and the owner of
/// every node in it.
///
/// A document contains a list of [`Definition`]s which
/// may be type-system definitions, type-system extensions,
/// or executable definitions (operations and fragments).
///
/// ```text
/// Document : Definition+
/// Definition :
///     ExecutableDefinition |
///     TypeSystemDefinitionOrExtension
/// ```
///
/// Values, type annotations, and selection sets live in the
/// document's [`AstArena`] and are referenced by id; resolve
/// them with [`value()`](Self::value),
/// [`type_annotation()`](Self::type_annotation), and
/// [`selection_set()`](Self::selection_set) (or by indexing
/// the document with the id).
///
/// String payloads borrow from the parsed source text. Use
/// [`into_static()`](Self::into_static) to detach the
/// document from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    /// Comments in source order. Empty unless the parser was
    /// configured to keep comments.
    pub comments: Vec<Comment<'src>>,
    pub span: GraphQLSourceSpan,
    pub(crate) arena: AstArena<'src>,
}

impl<'src> Document<'src> {
    pub(crate) fn new(
        definitions: Vec<Definition<'src>>,
        comments: Vec<Comment<'src>>,
        span: GraphQLSourceSpan,
        arena: AstArena<'src>,
    ) -> Self {
        Self {
            definitions,
            comments,
            span,
            arena,
        }
    }

    pub fn arena(&self) -> &AstArena<'src> {
        &self.arena
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this document.
    pub fn value(&self, id: ValueId) -> &Value<'src> {
        self.arena.value(id)
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this document.
    pub fn type_annotation(&self, id: TypeAnnotationId) -> &TypeAnnotation<'src> {
        self.arena.type_annotation(id)
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this document.
    pub fn selection_set(&self, id: SelectionSetId) -> &SelectionSet<'src> {
        self.arena.selection_set(id)
    }

    /// Iterate over only the type-system definitions
    /// and extensions in this document.
    pub fn schema_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| !d.kind().is_executable())
    }

    /// Iterate over only the executable definitions
    /// (operations and fragments) in this document.
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| d.kind().is_executable())
    }

    /// Copies every borrowed string so the document no longer
    /// borrows from the source text.
    pub fn into_static(self) -> Document<'static> {
        IntoStatic::into_static(self)
    }
}

impl<'src> Index<ValueId> for Document<'src> {
    type Output = Value<'src>;

    fn index(&self, id: ValueId) -> &Self::Output {
        self.value(id)
    }
}

impl<'src> Index<TypeAnnotationId> for Document<'src> {
    type Output = TypeAnnotation<'src>;

    fn index(&self, id: TypeAnnotationId) -> &Self::Output {
        self.type_annotation(id)
    }
}

impl<'src> Index<SelectionSetId> for Document<'src> {
    type Output = SelectionSet<'src>;

    fn index(&self, id: SelectionSetId) -> &Self::Output {
        self.selection_set(id)
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a GraphQL document.
///
/// Covers both type-system definitions (schema, types,
/// directives, extensions) and executable definitions
/// (operations, fragments).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    DirectiveDefinition(DirectiveDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    OperationDefinition(OperationDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}

impl Definition<'_> {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::DirectiveDefinition(_) => DefinitionKind::DirectiveDefinition,
            Definition::FragmentDefinition(_) => DefinitionKind::Fragment,
            Definition::OperationDefinition(_) => DefinitionKind::Operation,
            Definition::SchemaDefinition(_) | Definition::SchemaExtension(_) => {
                DefinitionKind::Schema
            },
            Definition::TypeDefinition(_) | Definition::TypeExtension(_) => {
                DefinitionKind::TypeDefinition
            },
        }
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Definition::DirectiveDefinition(d) => d.span,
            Definition::FragmentDefinition(d) => d.span,
            Definition::OperationDefinition(d) => d.span,
            Definition::SchemaDefinition(d) => d.span,
            Definition::SchemaExtension(d) => d.span,
            Definition::TypeDefinition(d) => d.span(),
            Definition::TypeExtension(d) => d.span(),
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}
