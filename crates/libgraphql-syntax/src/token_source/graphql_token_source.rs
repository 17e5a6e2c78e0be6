use crate::token::GraphQLToken;
use crate::GraphQLParseError;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]s or fail with a lexical [`GraphQLParseError`]).
///
/// This trait lets the parser run over any source of GraphQL tokens.
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) is
/// the lexer over `&str`; tests drive the parser from pre-built token
/// vectors.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// All lookahead, buffering, and peeking is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Lexers are responsible for:
/// - Skipping ignored tokens (whitespace, line terminators, commas, and
///   comments unless comments are retained)
/// - Yielding `Err` for malformed tokens, after which they should end
/// - Yielding a final token with
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from.
/// For string-based lexers, this enables zero-copy lexing where token values
/// can borrow directly from the input. Sources that must allocate their
/// strings use `'static`.
pub trait GraphQLTokenSource<'src>:
    Iterator<Item = Result<GraphQLToken<'src>, GraphQLParseError>>
{
}

impl<'src, T> GraphQLTokenSource<'src> for T where
    T: Iterator<Item = Result<GraphQLToken<'src>, GraphQLParseError>>
{
}
