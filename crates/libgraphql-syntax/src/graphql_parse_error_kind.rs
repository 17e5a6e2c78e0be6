use crate::DefinitionKind;
use crate::DocumentKind;
use crate::GraphQLErrorCategory;
use crate::GraphQLStringParsingError;
use crate::ReservedNameContext;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of `GraphQLParseError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    // =========================================================================
    // Lexical
    // =========================================================================
    /// A character that cannot start any token.
    ///
    /// # Example
    /// ```text
    /// { field; }
    ///        ^ unexpected character `;`
    /// ```
    #[error("unexpected character: {0:?}")]
    UnexpectedCharacter(char),

    /// A string or block string reached end of input (or, for a
    /// single-line string, a line terminator) before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A string literal with a malformed escape sequence.
    #[error("invalid string: {0}")]
    InvalidString(GraphQLStringParsingError),

    /// A malformed numeric literal (`01`, `1.`, `1e`, `-`, `123abc`).
    #[error("invalid number")]
    InvalidNumber,

    /// One, two, or spaced dots where `...` was intended.
    #[error("invalid spread")]
    InvalidEllipsis,

    // =========================================================================
    // Syntax
    // =========================================================================
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g., `[":"]`).
        expected: Vec<String>,
        /// Display form of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// Empty construct that requires content.
    ///
    /// Selection sets, argument lists, variable definition lists, and
    /// field/value/member lists inside braces cannot be empty.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Reserved name used in a context where it's not allowed.
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// A directive definition lists a location that is not one of the
    /// known directive locations.
    #[error("unknown directive location: `{name}`")]
    UnknownDirectiveLocation {
        name: String,
    },

    /// A non-null type wrapping another non-null type (`String!!`).
    #[error("non-null type cannot wrap a non-null type")]
    NestedNonNull,

    /// A `$variable` in a position that only permits constant values.
    #[error("variable in const context")]
    VariableInConstContext,

    /// An `extend` definition while extensions are disabled.
    #[error("type system extensions are disabled")]
    ExtensionsDisabled,

    /// A description string before a definition that cannot carry one.
    #[error("unexpected description")]
    UnexpectedDescription,

    /// Definition kind not allowed in the document being parsed.
    #[error("wrong document kind")]
    WrongDocumentKind {
        found: DefinitionKind,
        document_kind: DocumentKind,
    },

    /// Invalid syntax that doesn't fit other categories.
    #[error("invalid syntax")]
    InvalidSyntax,

    // =========================================================================
    // Limits
    // =========================================================================
    /// Nesting of selection sets, types, or values went deeper than the
    /// configured maximum.
    #[error("maximum nesting depth of {max_depth} exceeded")]
    DepthLimitExceeded {
        max_depth: usize,
    },
}

impl GraphQLParseErrorKind {
    /// Returns the broad failure class of this error.
    ///
    /// # Structure Note
    ///
    /// This match is exhaustive on purpose: a new variant must be placed in
    /// a category explicitly.
    pub fn category(&self) -> GraphQLErrorCategory {
        match self {
            GraphQLParseErrorKind::UnexpectedCharacter(_)
            | GraphQLParseErrorKind::UnterminatedString
            | GraphQLParseErrorKind::InvalidString(_)
            | GraphQLParseErrorKind::InvalidNumber
            | GraphQLParseErrorKind::InvalidEllipsis => GraphQLErrorCategory::Lexical,

            GraphQLParseErrorKind::UnexpectedToken { .. }
            | GraphQLParseErrorKind::UnexpectedEof { .. }
            | GraphQLParseErrorKind::InvalidEmptyConstruct { .. }
            | GraphQLParseErrorKind::ReservedName { .. }
            | GraphQLParseErrorKind::UnknownDirectiveLocation { .. }
            | GraphQLParseErrorKind::NestedNonNull
            | GraphQLParseErrorKind::VariableInConstContext
            | GraphQLParseErrorKind::ExtensionsDisabled
            | GraphQLParseErrorKind::UnexpectedDescription
            | GraphQLParseErrorKind::WrongDocumentKind { .. }
            | GraphQLParseErrorKind::InvalidSyntax => GraphQLErrorCategory::Syntax,

            GraphQLParseErrorKind::DepthLimitExceeded { .. } => {
                GraphQLErrorCategory::LimitExceeded
            },
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.category() == GraphQLErrorCategory::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.category() == GraphQLErrorCategory::Syntax
    }

    pub fn is_limit_exceeded(&self) -> bool {
        self.category() == GraphQLErrorCategory::LimitExceeded
    }
}
