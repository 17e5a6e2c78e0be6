/// A position within GraphQL source text, with dual column tracking.
///
/// This is a pure data struct. The lexer computes positions as it scans
/// input; nothing downstream ever re-derives them from offsets.
///
/// # Indexing Convention
///
/// **All stored values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: Unicode scalar count within the current line
/// - `col_utf16`: optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Human-facing diagnostics want 1-based numbers; use
/// [`line_number()`](Self::line_number) and
/// [`column_number()`](Self::column_number) for those.
///
/// # Dual Column Tracking
///
/// - **`col_utf8`** (always available): advances by 1 per character regardless
///   of its encoded width. This matches what most editors display.
/// - **`col_utf16`** (optional): advances by the character's UTF-16 length,
///   which is what LSP clients expect. It is `None` for positions synthesized
///   by token sources that cannot compute it (e.g. test mocks).
///
/// For ASCII text the two columns are equal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the first byte of a document.
    pub fn start_of_input() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// For LSP compatibility, prefer this method when available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 1-based line number, as shown to humans.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-based column (in characters), as shown to humans.
    pub fn column_number(&self) -> usize {
        self.col_utf8 + 1
    }
}
