use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Names and numeric literals store their raw source text. String literals
/// store their *decoded* value: escape sequences are processed and block
/// strings are dedented by the lexer, so the parser never re-reads quotes.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using
/// `Cow::Borrowed` and only allocates when a string literal had to be
/// decoded.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens. This matches
/// the GraphQL grammar for `IntValue`/`FloatValue`.
///
/// # Keywords
///
/// `true`, `false`, `null`, `query`, `on`, etc. are all plain `Name` tokens.
/// Whether a name acts as a keyword is decided by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators (no allocation needed)
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// The decoded contents of a string literal (quotes removed, escapes
    /// processed, block strings dedented).
    StringValue {
        value: Cow<'src, str>,
        /// `true` for `"""block"""` strings.
        is_block: bool,
    },

    // =========================================================================
    // Non-grammar tokens
    // =========================================================================
    /// The text of a `#` comment, excluding the `#` and the line terminator.
    ///
    /// Only emitted when the token source is configured to retain comments.
    Comment(Cow<'src, str>),

    /// A character that cannot begin any GraphQL token.
    ///
    /// The lexer reports these as tokens rather than failing so that
    /// token-level consumers can see them; the parser rejects them.
    Unknown(char),

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input.
    Eof,
}

impl<'src> GraphQLTokenKind<'src> {
    // =========================================================================
    // Helper constructors for creating token kinds
    // =========================================================================

    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    /// Create an `IntValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    /// Create a `FloatValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    /// Create a `StringValue` token.
    #[inline]
    pub fn string_value(value: Cow<'src, str>, is_block: bool) -> Self {
        GraphQLTokenKind::StringValue { value, is_block }
    }

    /// Create a `Comment` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn comment_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Comment(Cow::Borrowed(s))
    }

    // =========================================================================
    // Query methods
    // =========================================================================

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue { .. }
            | GraphQLTokenKind::Comment(_)
            | GraphQLTokenKind::Unknown(_)
            | GraphQLTokenKind::Eof => None,
        }
    }

    /// Returns the textual payload of `Name`, `IntValue`, `FloatValue`,
    /// `StringValue`, and `Comment` tokens.
    ///
    /// Punctuators, `Unknown`, and `Eof` have no value.
    pub fn value(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s)
            | GraphQLTokenKind::Comment(s) => Some(s),
            GraphQLTokenKind::StringValue { value, .. } => Some(value),

            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::Unknown(_)
            | GraphQLTokenKind::Eof => None,
        }
    }

    /// Returns `true` if this token can begin a value literal (`IntValue`,
    /// `FloatValue`, `StringValue`). `true`/`false`/`null` are `Name`s and
    /// are not included.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue { .. }
        )
    }

    /// Returns `true` if this is a `Name` token spelled exactly `keyword`.
    pub fn is_name(&self, keyword: &str) -> bool {
        matches!(self, GraphQLTokenKind::Name(name) if name == keyword)
    }

    /// The canonical upper-case name of this kind (`"BRACE_L"`, `"NAME"`,
    /// `"EOF"`, ...).
    pub fn spec_name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Ampersand => "AMPERSAND",
            GraphQLTokenKind::At => "AT",
            GraphQLTokenKind::Bang => "BANG",
            GraphQLTokenKind::Colon => "COLON",
            GraphQLTokenKind::CurlyBraceClose => "BRACE_R",
            GraphQLTokenKind::CurlyBraceOpen => "BRACE_L",
            GraphQLTokenKind::Dollar => "DOLLAR",
            GraphQLTokenKind::Ellipsis => "SPREAD",
            GraphQLTokenKind::Equals => "EQUALS",
            GraphQLTokenKind::ParenClose => "PAREN_R",
            GraphQLTokenKind::ParenOpen => "PAREN_L",
            GraphQLTokenKind::Pipe => "PIPE",
            GraphQLTokenKind::SquareBracketClose => "BRACKET_R",
            GraphQLTokenKind::SquareBracketOpen => "BRACKET_L",
            GraphQLTokenKind::Name(_) => "NAME",
            GraphQLTokenKind::IntValue(_) => "INT",
            GraphQLTokenKind::FloatValue(_) => "FLOAT",
            GraphQLTokenKind::StringValue { .. } => "STRING",
            GraphQLTokenKind::Comment(_) => "COMMENT",
            GraphQLTokenKind::Unknown(_) => "UNKNOWN",
            GraphQLTokenKind::Eof => "EOF",
        }
    }

    /// How this token is shown in "expected X, found Y" messages (without
    /// surrounding backticks).
    pub fn display(&self) -> String {
        if let Some(p) = self.as_punctuator_str() {
            return p.to_string();
        }
        match self {
            GraphQLTokenKind::Name(name) => name.to_string(),
            GraphQLTokenKind::IntValue(raw) | GraphQLTokenKind::FloatValue(raw) => {
                raw.to_string()
            },
            GraphQLTokenKind::StringValue { is_block: true, .. } => "block string".to_string(),
            GraphQLTokenKind::StringValue { is_block: false, .. } => "string".to_string(),
            GraphQLTokenKind::Comment(_) => "comment".to_string(),
            GraphQLTokenKind::Unknown(ch) => ch.to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            _ => self.spec_name().to_string(),
        }
    }
}
