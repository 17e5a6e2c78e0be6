//! Bounded lookahead over a [`GraphQLTokenSource`].

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Streaming buffer that produces [`GraphQLToken`]s from some
/// [`GraphQLTokenSource`] with bounded lookahead.
///
/// This structure accepts any [`GraphQLTokenSource`] and provides
/// lookahead capabilities while maintaining efficient streaming
/// behavior. It centralizes buffering, peeking, and lookahead logic.
///
/// # Comments
///
/// `Comment` tokens never reach the grammar: they are diverted into a side
/// list (see [`take_comments()`](Self::take_comments)) as they are pulled
/// from the source.
///
/// # End of input
///
/// Once the source yields `Eof` (or simply runs dry) every further peek or
/// consume returns an `Eof` token at the same position.
///
/// # Errors
///
/// A lexical error from the source is remembered and returned by every
/// peek/consume that needs to look at or past the failed token.
///
/// # Internal Buffer Management
///
/// Tokens are stored in a [`VecDeque`] ring buffer. Unconsumed
/// tokens are buffered at the back; `consume()` pops from the front
/// and returns the owned token via O(1) `pop_front()`.
pub struct GraphQLTokenStream<
    'src,
    TTokenSource: GraphQLTokenSource<'src>,
> {
    token_source: TTokenSource,
    /// Ring buffer of unconsumed tokens. Grows at the back via
    /// `ensure_buffer_has()`; consumed from the front via
    /// `pop_front()`.
    buffer: VecDeque<GraphQLToken<'src>>,
    comments: Vec<GraphQLToken<'src>>,
    eof: Option<GraphQLToken<'src>>,
    error: Option<GraphQLParseError>,
    /// End of the last token pulled from the source (used to place a
    /// synthesized `Eof`).
    last_pulled_end: SourcePosition,
    /// End of the last token handed out by `consume()`.
    last_consumed_end: SourcePosition,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLTokenStream<'src, TTokenSource>
{
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            comments: Vec::new(),
            eof: None,
            error: None,
            last_pulled_end: SourcePosition::start_of_input(),
            last_consumed_end: SourcePosition::start_of_input(),
        }
    }

    /// Advance to the next token and return it as an owned value.
    pub fn consume(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        self.ensure_buffer_has(1)?;
        let token = self
            .buffer
            .pop_front()
            .unwrap_or_else(|| self.eof_token());
        self.last_consumed_end = token.span.end_exclusive;
        Ok(token)
    }

    /// Returns the number of [`GraphQLToken`]s currently buffered
    /// (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if we've reached the end of the stream.
    ///
    /// Returns `false` when the next token is a lexical error, so that the
    /// caller goes on to surface it.
    pub fn is_at_end(&mut self) -> bool {
        matches!(self.peek(), Ok(token) if token.is_eof())
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Result<&GraphQLToken<'src>, GraphQLParseError> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from next unconsumed
    /// token).
    ///
    /// `peek_nth(0)` is equivalent to `peek()`.
    pub fn peek_nth(
        &mut self,
        n: usize,
    ) -> Result<&GraphQLToken<'src>, GraphQLParseError> {
        self.ensure_buffer_has(n + 1)?;
        Ok(&self.buffer[n])
    }

    /// End position of the most recently consumed token (or the start of
    /// input if nothing has been consumed yet).
    pub fn previous_token_end(&self) -> SourcePosition {
        self.last_consumed_end
    }

    /// Removes and returns the `Comment` tokens seen so far, in source
    /// order.
    pub fn take_comments(&mut self) -> Vec<GraphQLToken<'src>> {
        std::mem::take(&mut self.comments)
    }

    /// Fill the buffer to ensure it has at least `count`
    /// unconsumed elements.
    fn ensure_buffer_has(&mut self, count: usize) -> Result<(), GraphQLParseError> {
        while self.buffer.len() < count {
            if let Some(error) = &self.error {
                return Err(error.clone());
            }

            if self.eof.is_some() {
                let eof = self.eof_token();
                self.buffer.push_back(eof);
                continue;
            }

            match self.token_source.next() {
                Some(Ok(token)) => {
                    self.last_pulled_end = token.span.end_exclusive;
                    match token.kind {
                        GraphQLTokenKind::Comment(_) => self.comments.push(token),
                        GraphQLTokenKind::Eof => {
                            self.eof = Some(token.clone());
                            self.buffer.push_back(token);
                        },
                        _ => self.buffer.push_back(token),
                    }
                },
                Some(Err(error)) => {
                    self.error = Some(error.clone());
                    return Err(error);
                },
                None => {
                    let pos = self.last_pulled_end;
                    self.eof = Some(GraphQLToken::new(
                        GraphQLTokenKind::Eof,
                        GraphQLSourceSpan::empty_at(pos),
                    ));
                },
            }
        }
        Ok(())
    }

    fn eof_token(&self) -> GraphQLToken<'src> {
        self.eof.clone().unwrap_or_else(|| {
            GraphQLToken::new(
                GraphQLTokenKind::Eof,
                GraphQLSourceSpan::empty_at(self.last_pulled_end),
            )
        })
    }
}
