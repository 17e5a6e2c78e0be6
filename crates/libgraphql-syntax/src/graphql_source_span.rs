use crate::ByteSpan;
use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span sitting at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// Extracts a compact `ByteSpan` from this span's byte
    /// offsets, discarding line/column information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_inclusive.byte_offset() as u32,
            end: self.end_exclusive.byte_offset() as u32,
        }
    }

    /// Returns the slice of `source` covered by this span.
    ///
    /// Returns `None` when the span does not fall on character
    /// boundaries of `source` (i.e. `source` is not the text this span
    /// was produced from).
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }
}
