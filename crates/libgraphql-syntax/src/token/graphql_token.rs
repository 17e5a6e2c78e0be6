use crate::token::GraphQLTokenKind;
use crate::ByteSpan;
use crate::GraphQLSourceSpan;

/// A GraphQL token with location (span) information.
///
/// Offsets are half-open byte offsets into the source; line and column are
/// 1-based with the column counted in characters.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }

    /// Byte offset of the first byte of this token.
    pub fn start(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// Byte offset one past the last byte of this token.
    pub fn end(&self) -> usize {
        self.span.end_exclusive.byte_offset()
    }

    /// 1-based line on which this token starts.
    pub fn line(&self) -> usize {
        self.span.start_inclusive.line_number()
    }

    /// 1-based column (in characters) at which this token starts.
    pub fn column(&self) -> usize {
        self.span.start_inclusive.column_number()
    }

    pub fn byte_span(&self) -> ByteSpan {
        self.span.byte_span()
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, GraphQLTokenKind::Eof)
    }
}
