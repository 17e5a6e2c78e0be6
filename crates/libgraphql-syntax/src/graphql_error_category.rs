/// The three broad failure classes a parse can end with.
///
/// Every [`GraphQLParseErrorKind`](crate::GraphQLParseErrorKind) maps to
/// exactly one category via
/// [`category()`](crate::GraphQLParseErrorKind::category). All three are
/// terminal for the parse call that produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLErrorCategory {
    /// A malformed token: bad escape, unterminated string, malformed number,
    /// stray dots, or a character that starts no token.
    Lexical,

    /// The token stream does not match the grammar.
    Syntax,

    /// A configured resource limit (nesting depth) was exceeded.
    LimitExceeded,
}

impl std::fmt::Display for GraphQLErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GraphQLErrorCategory::Lexical => "lexical error",
            GraphQLErrorCategory::Syntax => "syntax error",
            GraphQLErrorCategory::LimitExceeded => "limit exceeded",
        })
    }
}
