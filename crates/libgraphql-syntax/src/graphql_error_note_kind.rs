/// The kind of an error note (determines how the note is rendered).
///
/// Different kinds are rendered with different prefixes by
/// [`GraphQLParseError::format_detailed`](crate::GraphQLParseError::format_detailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...`.
    /// Example: "opening `{` here" (with span pointing to the opener)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    /// Example: "did you mean `FIELD_DEFINITION`?"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// Prefix used when the note is rendered.
    pub fn label(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}
