/// The kind of definition found in a GraphQL document.
///
/// Used for error reporting and programmatic categorization of definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// `schema { ... }` or `extend schema { ... }`
    Schema,
    /// `type`, `interface`, `union`, `enum`, `scalar`, `input`, or their
    /// `extend` variants.
    TypeDefinition,
    /// `directive @name on ...`
    DirectiveDefinition,
    /// `query`, `mutation`, `subscription`, or anonymous `{ ... }`
    Operation,
    /// `fragment Name on Type { ... }`
    Fragment,
}

impl DefinitionKind {
    pub fn is_executable(&self) -> bool {
        matches!(self, DefinitionKind::Operation | DefinitionKind::Fragment)
    }

    pub(crate) fn description(&self) -> &'static str {
        match self {
            DefinitionKind::Schema => "schema definition",
            DefinitionKind::TypeDefinition => "type definition",
            DefinitionKind::DirectiveDefinition => "directive definition",
            DefinitionKind::Operation => "operation definition",
            DefinitionKind::Fragment => "fragment definition",
        }
    }
}
