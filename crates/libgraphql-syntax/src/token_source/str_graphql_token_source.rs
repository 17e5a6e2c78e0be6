//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! This lexer implements zero-copy lexing: names, numbers, comments, and
//! strings without escape sequences borrow directly from the source string
//! using `Cow::Borrowed`.
//!
//! # Features
//!
//! - **Zero-copy lexing**: Token values borrow from source text when possible
//! - **Dual column tracking**: Reports both UTF-8 character positions (for
//!   display) and UTF-16 code unit positions (for LSP compatibility)
//! - **Optional comment retention**: `#` comments are skipped unless
//!   [`with_retained_comments(true)`](StrGraphQLTokenSource::with_retained_comments)
//!   is set, in which case they are emitted as `Comment` tokens
//! - **Fail-fast**: A malformed token produces an `Err`; unrecognized
//!   characters are surfaced as `Unknown` tokens for the consumer to reject
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_syntax::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! let kinds: Vec<&'static str> = lexer
//!     .map(|token| token.unwrap().kind.spec_name())
//!     .collect();
//! assert_eq!(kinds, ["BRACE_L", "NAME", "BRACE_R", "EOF"]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::decode_block_string;
use crate::token::decode_string;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";

/// A lexer over a `&str` of GraphQL source text.
///
/// Produces [`GraphQLToken`]s with zero-copy string values where possible.
/// The `'src` lifetime ties token values to the source string.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    ///
    /// This counts characters, not bytes. For example, "🎉" (4 bytes) advances
    /// this by 1.
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    ///
    /// Characters outside the Basic Multilingual Plane (U+10000 and above)
    /// advance this by 2 (surrogate pair).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`.
    ///
    /// When we see `\r` we advance the line; if the next character is `\n`
    /// it completes the same line break and must not advance it again.
    last_char_was_cr: bool,

    /// Emit `Comment` tokens instead of skipping comments.
    retain_comments: bool,

    /// Whether iteration is over (EOF or an error was yielded).
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use libgraphql_syntax::token_source::StrGraphQLTokenSource;
    /// let lexer = StrGraphQLTokenSource::new("{ name }");
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            retain_comments: false,
            finished: false,
        }
    }

    /// Emit `#` comments as [`GraphQLTokenKind::Comment`] tokens rather than
    /// skipping them.
    pub fn with_retained_comments(mut self, retain_comments: bool) -> Self {
        self.retain_comments = retain_comments;
        self
    }

    /// The full source text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The position the next call to [`next_token()`](Self::next_token)
    /// starts scanning from.
    pub fn position(&self) -> SourcePosition {
        self.curr_position()
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    /// Peeks at the next character without consuming it.
    ///
    /// Returns `None` if at end of input.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_is_digit(&self) -> bool {
        self.remaining().as_bytes().first().is_some_and(u8::is_ascii_digit)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Returns `None` if at end of input.
    ///
    /// This method handles:
    /// - Advancing byte offset by the character's UTF-8 length
    /// - Incrementing line number on newlines (`\n`, `\r`, `\r\n`)
    /// - Tracking UTF-8 character column and UTF-16 code unit column
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of `\r\n`: the line already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances over `text`, which must be the next bytes of input and must
    /// not contain a line terminator.
    fn advance_within_line(&mut self, text: &str) {
        if text.is_ascii() {
            self.curr_col_utf8 += text.len();
            self.curr_col_utf16 += text.len();
        } else {
            for ch in text.chars() {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
            }
        }
        if !text.is_empty() {
            self.last_char_was_cr = false;
        }
        self.curr_byte_offset += text.len();
    }

    fn consume_digits(&mut self) {
        let digits = self
            .remaining()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.advance_within_line(&self.remaining()[..digits]);
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Lexes the next token.
    ///
    /// Once the end of input is reached every further call returns another
    /// `Eof` token at the same position.
    pub fn next_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        loop {
            self.skip_ignored();

            let start = self.curr_position();

            let token_kind = match self.peek_char() {
                None => GraphQLTokenKind::Eof,

                Some('#') => {
                    let comment = self.lex_comment();
                    if self.retain_comments {
                        log::trace!(
                            "retaining comment at line {}: {comment:?}",
                            start.line_number(),
                        );
                        GraphQLTokenKind::comment_borrowed(comment)
                    } else {
                        continue;
                    }
                },

                Some('!') => self.punctuator(GraphQLTokenKind::Bang),
                Some('$') => self.punctuator(GraphQLTokenKind::Dollar),
                Some('&') => self.punctuator(GraphQLTokenKind::Ampersand),
                Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen),
                Some(')') => self.punctuator(GraphQLTokenKind::ParenClose),
                Some(':') => self.punctuator(GraphQLTokenKind::Colon),
                Some('=') => self.punctuator(GraphQLTokenKind::Equals),
                Some('@') => self.punctuator(GraphQLTokenKind::At),
                Some('[') => self.punctuator(GraphQLTokenKind::SquareBracketOpen),
                Some(']') => self.punctuator(GraphQLTokenKind::SquareBracketClose),
                Some('{') => self.punctuator(GraphQLTokenKind::CurlyBraceOpen),
                Some('}') => self.punctuator(GraphQLTokenKind::CurlyBraceClose),
                Some('|') => self.punctuator(GraphQLTokenKind::Pipe),

                Some('.') => self.lex_dot_or_ellipsis(start)?,

                Some('"') => self.lex_string(start)?,

                Some(c) if is_name_start(c) => self.lex_name(),

                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start)?,

                Some(c) => {
                    self.consume();
                    log::trace!(
                        "unknown character {} at line {} column {}",
                        describe_char(c),
                        start.line_number(),
                        start.column_number(),
                    );
                    GraphQLTokenKind::Unknown(c)
                },
            };

            return Ok(self.make_token(token_kind, start));
        }
    }

    /// Lexes the token that follows `position`.
    ///
    /// The lexer's cursor is moved to `position` (which should be a position
    /// previously reported by this lexer, typically a token's
    /// `span.end_exclusive`) and one token is read. The result depends only
    /// on the source text and `position`.
    ///
    /// Offsets past the end of the source are clamped to the end; offsets
    /// inside a multi-byte character are moved back to its first byte.
    pub fn read_token_at(
        &mut self,
        position: &SourcePosition,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let mut offset = position.byte_offset().min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        self.curr_byte_offset = offset;
        self.curr_line = position.line();
        self.curr_col_utf8 = position.col_utf8();
        self.curr_col_utf16 = position.col_utf16().unwrap_or(position.col_utf8());
        self.last_char_was_cr = false;
        self.finished = false;
        self.next_token()
    }

    fn punctuator(&mut self, kind: GraphQLTokenKind<'src>) -> GraphQLTokenKind<'src> {
        self.consume();
        kind
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips ignored tokens other than comments.
    ///
    /// These are:
    /// - Space (U+0020) and tab (U+0009)
    /// - Line terminators: LF (U+000A), CR (U+000D), CRLF
    /// - Comma
    /// - BOM (U+FEFF), ignored anywhere in the document
    ///
    /// See: <https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Skips whitespace but only on the same line.
    ///
    /// Used for dot consolidation - we only merge dots that are on the same
    /// line.
    fn skip_whitespace_same_line(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Consumes a `#` comment and returns its text (without the `#` and
    /// without the line terminator).
    fn lex_comment(&mut self) -> &'src str {
        self.consume(); // `#`
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let content = &rest[..len];
        self.advance_within_line(content);
        content
    }

    // =========================================================================
    // Dot / Ellipsis
    // =========================================================================

    /// Lexes dots, producing either an `Ellipsis` token or an error.
    ///
    /// - `...` (adjacent) → `Ellipsis`
    /// - `.` alone → error (no hint, it could be many things like `Foo.Bar`)
    /// - `..` (adjacent) → error with help to add third dot
    /// - `. .`, `.. .`, `. ..`, `. . .` (spaced, same line) → error with help
    ///   about spacing
    fn lex_dot_or_ellipsis(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLTokenKind<'src>, GraphQLParseError> {
        let first_dot_line = self.curr_line;
        self.consume();

        self.skip_whitespace_same_line();
        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return Err(self.ellipsis_error(start, "unexpected `.`", None));
        }

        let second_dot_start = self.curr_position();
        let first_two_adjacent = second_dot_start.byte_offset() == start.byte_offset() + 1;
        self.consume();

        self.skip_whitespace_same_line();
        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return Err(if first_two_adjacent {
                self.ellipsis_error(
                    start,
                    "unexpected `..` (use `...` for spread operator)",
                    Some("Add one more `.` to form the spread operator `...`"),
                )
            } else {
                self.ellipsis_error(
                    start,
                    "unexpected `. .` (use `...` for spread operator)",
                    Some(SPACED_DOTS_HELP),
                )
            });
        }

        let third_dot_start = self.curr_position();
        self.consume();
        let second_third_adjacent =
            third_dot_start.byte_offset() == second_dot_start.byte_offset() + 1;

        match (first_two_adjacent, second_third_adjacent) {
            (true, true) => Ok(GraphQLTokenKind::Ellipsis),
            (true, false) => Err(self.ellipsis_error(
                start,
                "unexpected `.. .`",
                Some(
                    "This `.` may have been intended to complete a `...` spread \
                     operator. Try removing the extra spacing between the dots.",
                ),
            )),
            (false, true) => Err(self.ellipsis_error(start, "unexpected `. ..`", Some(SPACED_DOTS_HELP))),
            (false, false) => {
                Err(self.ellipsis_error(start, "unexpected `. . .`", Some(SPACED_DOTS_HELP)))
            },
        }
    }

    fn ellipsis_error(
        &self,
        start: SourcePosition,
        message: &str,
        help: Option<&str>,
    ) -> GraphQLParseError {
        let mut notes = GraphQLErrorNotes::new();
        if let Some(help) = help {
            notes.push(GraphQLErrorNote::help(help));
        }
        GraphQLParseError::with_notes(
            message,
            self.make_span(start),
            GraphQLParseErrorKind::InvalidEllipsis,
            notes,
        )
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name. Names match the pattern `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// `true`, `false`, `null` and every other keyword are ordinary names.
    fn lex_name(&mut self) -> GraphQLTokenKind<'src> {
        let rest = self.remaining();
        let len = rest
            .bytes()
            .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
            .count();
        let name = &rest[..len];
        self.advance_within_line(name);
        GraphQLTokenKind::name_borrowed(name)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number may not be directly followed by `.` or a name-start
    /// character (`1.5.`, `123abc`).
    fn lex_number(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLTokenKind<'src>, GraphQLParseError> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit()
                {
                    return Err(self.number_error(
                        start,
                        format!("invalid number, unexpected digit after 0: `{ch}`"),
                        INT_VALUE_SPEC_URL,
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            _ => return Err(self.expected_digit_error(start, INT_VALUE_SPEC_URL)),
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            if !self.peek_is_digit() {
                return Err(self.expected_digit_error(start, FLOAT_VALUE_SPEC_URL));
            }
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_is_digit() {
                return Err(self.expected_digit_error(start, FLOAT_VALUE_SPEC_URL));
            }
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            let spec_url = if is_float { FLOAT_VALUE_SPEC_URL } else { INT_VALUE_SPEC_URL };
            return Err(self.expected_digit_error(start, spec_url));
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        Ok(if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        })
    }

    /// "expected digit" error describing the character at the cursor.
    fn expected_digit_error(&self, start: SourcePosition, spec_url: &str) -> GraphQLParseError {
        let found = match self.peek_char() {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        };
        self.number_error(
            start,
            format!("invalid number, expected digit but found {found}"),
            spec_url,
        )
    }

    fn number_error(
        &self,
        start: SourcePosition,
        message: String,
        spec_url: &str,
    ) -> GraphQLParseError {
        GraphQLParseError::with_notes(
            message,
            self.make_span(start),
            GraphQLParseErrorKind::InvalidNumber,
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a string literal (single-line or block string) and decodes its
    /// value.
    fn lex_string(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLTokenKind<'src>, GraphQLParseError> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume(); // opening `"`
        let content_start = self.curr_byte_offset;

        let content_end = loop {
            match self.peek_char() {
                None => {
                    return Err(self.unterminated_string_error(
                        start,
                        "Add closing `\"`",
                    ));
                },
                Some('\n' | '\r') => {
                    let mut error = self.unterminated_string_error(
                        start,
                        "Use a block string (triple quotes) for multi-line strings, or \
                         escape the newline with `\\n`",
                    );
                    error.add_note("single-line strings cannot contain unescaped line terminators");
                    return Err(error);
                },
                Some('"') => {
                    let end = self.curr_byte_offset;
                    self.consume();
                    break end;
                },
                Some('\\') => {
                    self.consume();
                    // The escaped character is validated during decoding; a
                    // line terminator here still ends the string.
                    if !matches!(self.peek_char(), None | Some('\n' | '\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        };

        let content = &self.source[content_start..content_end];
        let value = decode_string(content).map_err(|err| {
            GraphQLParseError::new(
                err.to_string(),
                self.make_span(start),
                GraphQLParseErrorKind::InvalidString(err),
            )
        })?;

        Ok(GraphQLTokenKind::string_value(value, false))
    }

    /// Lexes a block string literal.
    fn lex_block_string(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLTokenKind<'src>, GraphQLParseError> {
        self.advance_within_line("\"\"\"");
        let content_start = self.curr_byte_offset;

        let content_end = loop {
            match self.peek_char() {
                None => {
                    return Err(self.unterminated_string_error(
                        start,
                        "Add closing `\"\"\"`",
                    ));
                },
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => {
                    self.advance_within_line("\\\"\"\"");
                },
                Some('"') if self.remaining().starts_with("\"\"\"") => {
                    let end = self.curr_byte_offset;
                    self.advance_within_line("\"\"\"");
                    break end;
                },
                Some(_) => {
                    self.consume();
                },
            }
        };

        let content = &self.source[content_start..content_end];
        Ok(GraphQLTokenKind::string_value(decode_block_string(content), true))
    }

    fn unterminated_string_error(&self, start: SourcePosition, help: &str) -> GraphQLParseError {
        GraphQLParseError::with_notes(
            "unterminated string",
            self.make_span(start),
            GraphQLParseErrorKind::UnterminatedString,
            smallvec![GraphQLErrorNote::help(help)],
        )
    }
}

const SPACED_DOTS_HELP: &str = "These dots may have been intended to form a `...` spread \
                                operator. Try removing the extra spacing between the dots.";

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };

        Some(result)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
///
/// <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks.
/// For invisible/control characters, includes Unicode code point description.
pub(crate) fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        if let Some(name) = unicode_char_name(ch) {
            format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name)
        } else {
            format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
        }
    } else {
        format!("`{ch}`")
    }
}

/// Returns the Unicode name for well-known invisible/control characters.
///
/// Returns `None` for characters without a known name.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        // C0 control characters (U+0000 - U+001F)
        '\u{0000}' => Some("NULL"),
        '\u{0001}' => Some("START OF HEADING"),
        '\u{0002}' => Some("START OF TEXT"),
        '\u{0003}' => Some("END OF TEXT"),
        '\u{0004}' => Some("END OF TRANSMISSION"),
        '\u{0005}' => Some("ENQUIRY"),
        '\u{0006}' => Some("ACKNOWLEDGE"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{0009}' => Some("HORIZONTAL TAB"),
        '\u{000A}' => Some("LINE FEED"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000D}' => Some("CARRIAGE RETURN"),
        '\u{000E}' => Some("SHIFT OUT"),
        '\u{000F}' => Some("SHIFT IN"),
        '\u{0010}' => Some("DATA LINK ESCAPE"),
        '\u{0011}' => Some("DEVICE CONTROL ONE"),
        '\u{0012}' => Some("DEVICE CONTROL TWO"),
        '\u{0013}' => Some("DEVICE CONTROL THREE"),
        '\u{0014}' => Some("DEVICE CONTROL FOUR"),
        '\u{0015}' => Some("NEGATIVE ACKNOWLEDGE"),
        '\u{0016}' => Some("SYNCHRONOUS IDLE"),
        '\u{0017}' => Some("END OF TRANSMISSION BLOCK"),
        '\u{0018}' => Some("CANCEL"),
        '\u{0019}' => Some("END OF MEDIUM"),
        '\u{001A}' => Some("SUBSTITUTE"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{001C}' => Some("FILE SEPARATOR"),
        '\u{001D}' => Some("GROUP SEPARATOR"),
        '\u{001E}' => Some("RECORD SEPARATOR"),
        '\u{001F}' => Some("UNIT SEPARATOR"),

        // C1 control characters and special (U+007F - U+00AD)
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),

        // General punctuation - spaces (U+2000 - U+200A)
        '\u{2000}' => Some("EN QUAD"),
        '\u{2001}' => Some("EM QUAD"),
        '\u{2002}' => Some("EN SPACE"),
        '\u{2003}' => Some("EM SPACE"),
        '\u{2004}' => Some("THREE-PER-EM SPACE"),
        '\u{2005}' => Some("FOUR-PER-EM SPACE"),
        '\u{2006}' => Some("SIX-PER-EM SPACE"),
        '\u{2007}' => Some("FIGURE SPACE"),
        '\u{2008}' => Some("PUNCTUATION SPACE"),
        '\u{2009}' => Some("THIN SPACE"),
        '\u{200A}' => Some("HAIR SPACE"),

        // Zero-width and formatting characters (U+200B - U+200F)
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),

        // Bidirectional text formatting (U+202A - U+202F)
        '\u{202A}' => Some("LEFT-TO-RIGHT EMBEDDING"),
        '\u{202B}' => Some("RIGHT-TO-LEFT EMBEDDING"),
        '\u{202C}' => Some("POP DIRECTIONAL FORMATTING"),
        '\u{202D}' => Some("LEFT-TO-RIGHT OVERRIDE"),
        '\u{202E}' => Some("RIGHT-TO-LEFT OVERRIDE"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),

        // Other special spaces
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{205F}' => Some("MEDIUM MATHEMATICAL SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),

        // BOM and noncharacters
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        '\u{FFFE}' => Some("NONCHARACTER"),
        '\u{FFFF}' => Some("NONCHARACTER"),

        _ => None,
    }
}
