/// Error produced while decoding the contents of a GraphQL string literal.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An escape other than `\" \\ \/ \b \f \n \r \t \u` (e.g. `\q`).
    #[error("invalid character escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// A malformed `\uXXXX` or `\u{...}` escape, or one naming a lone
    /// surrogate or a code point outside the Unicode range.
    #[error("invalid unicode escape sequence: `{0}`")]
    InvalidUnicodeEscape(String),
}
