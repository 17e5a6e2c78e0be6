/// The kind of GraphQL document being parsed.
///
/// Different document kinds allow different definition types:
/// - Schema documents: only type system definitions and extensions
/// - Executable documents: only operations and fragments
/// - Mixed documents: both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Schema,
    Executable,
    Mixed,
}

impl DocumentKind {
    pub(crate) fn allows(&self, definition: crate::DefinitionKind) -> bool {
        match self {
            DocumentKind::Mixed => true,
            DocumentKind::Executable => definition.is_executable(),
            DocumentKind::Schema => !definition.is_executable(),
        }
    }

    pub(crate) fn description(&self) -> &'static str {
        match self {
            DocumentKind::Schema => "schema document",
            DocumentKind::Executable => "executable document",
            DocumentKind::Mixed => "document",
        }
    }
}
