/// Contexts where certain names are reserved in GraphQL.
///
/// Used by `GraphQLParseErrorKind::ReservedName` to indicate which context
/// rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names cannot be `on` (it introduces the type condition).
    ///
    /// Invalid: `fragment on on User { ... }`
    FragmentName,

    /// Enum values cannot be `true`, `false`, or `null`.
    ///
    /// Invalid: `enum Bool { true false }`
    EnumValue,
}

impl ReservedNameContext {
    pub(crate) fn description(&self) -> &'static str {
        match self {
            ReservedNameContext::FragmentName => "fragment name",
            ReservedNameContext::EnumValue => "enum value",
        }
    }
}
