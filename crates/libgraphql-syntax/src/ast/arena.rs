use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// Index of a [`Value`] in a document's [`AstArena`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ValueId(u32);

/// Index of a [`TypeAnnotation`] in a document's [`AstArena`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypeAnnotationId(u32);

/// Index of a [`SelectionSet`] in a document's [`AstArena`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SelectionSetId(u32);

impl ValueId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TypeAnnotationId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SelectionSetId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Storage for the recursive node families of a document.
///
/// Values, type annotations, and selection sets can nest arbitrarily, so
/// rather than boxing children each parent holds a copyable id into this
/// arena. Nodes are appended in the order their parsing *completes*, so a
/// child always has a smaller id than its parent.
///
/// Ids are only meaningful for the arena (document) that produced them;
/// looking up an id from another document may panic or return an
/// unrelated node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AstArena<'src> {
    pub(crate) values: Vec<Value<'src>>,
    pub(crate) type_annotations: Vec<TypeAnnotation<'src>>,
    pub(crate) selection_sets: Vec<SelectionSet<'src>>,
}

impl<'src> AstArena<'src> {
    pub(crate) fn alloc_value(&mut self, value: Value<'src>) -> ValueId {
        let id = ValueId(self.values.len() as u32);
        self.values.push(value);
        id
    }

    pub(crate) fn alloc_type_annotation(
        &mut self,
        type_annotation: TypeAnnotation<'src>,
    ) -> TypeAnnotationId {
        let id = TypeAnnotationId(self.type_annotations.len() as u32);
        self.type_annotations.push(type_annotation);
        id
    }

    pub(crate) fn alloc_selection_set(
        &mut self,
        selection_set: SelectionSet<'src>,
    ) -> SelectionSetId {
        let id = SelectionSetId(self.selection_sets.len() as u32);
        self.selection_sets.push(selection_set);
        id
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    pub fn value(&self, id: ValueId) -> &Value<'src> {
        &self.values[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    pub fn type_annotation(&self, id: TypeAnnotationId) -> &TypeAnnotation<'src> {
        &self.type_annotations[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    pub fn selection_set(&self, id: SelectionSetId) -> &SelectionSet<'src> {
        &self.selection_sets[id.index()]
    }

    pub fn values(&self) -> &[Value<'src>] {
        &self.values
    }

    pub fn type_annotations(&self) -> &[TypeAnnotation<'src>] {
        &self.type_annotations
    }

    pub fn selection_sets(&self) -> &[SelectionSet<'src>] {
        &self.selection_sets
    }
}
