use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// Extra context attached to a [`GraphQLParseError`](crate::GraphQLParseError).
///
/// The lexer and parser attach at most a couple of these per error: where an
/// unclosed delimiter was opened, a did-you-mean hint for a misspelled
/// directive location, or a link into the GraphQL spec.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Related location. `format_detailed` renders a second snippet for it.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    fn new(
        kind: GraphQLErrorNoteKind,
        message: impl Into<String>,
        span: Option<GraphQLSourceSpan>,
    ) -> Self {
        Self { kind, message: message.into(), span }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, None)
    }

    /// A note pointing at a related location, such as the `{` an
    /// unterminated selection set was opened with.
    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message, None)
    }

    /// A link to the relevant section of the GraphQL spec.
    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url, None)
    }

    /// `note: ...`, `help: ...`, or `spec: ...`
    pub fn render(&self) -> String {
        format!("{}: {}", self.kind.label(), self.message)
    }
}

/// Most errors carry 0-2 notes, so these stay inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
