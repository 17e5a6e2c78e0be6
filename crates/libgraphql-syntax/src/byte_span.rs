/// Compact byte-offset span. 8 bytes.
///
/// Represents a half-open interval `[start, end)` of byte offsets
/// into a byte-array of source text. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, which is sufficient
/// for any GraphQL document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` falls within `[start, end)`.
    pub fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }
}
