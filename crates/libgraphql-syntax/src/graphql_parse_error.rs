use crate::GraphQLErrorCategory;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use std::path::Path;
use std::path::PathBuf;

/// The error a failed parse or lex returns.
///
/// Parsing is fail-fast, so a failed parse yields exactly one of these. The
/// position it reports (`line()`, `column()`, `offset()`) is where the
/// problem was detected:
/// - For "unexpected token" errors: the unexpected token
/// - For errors at end of input: the `Eof` token's position
/// - For lexical errors: the start of the malformed token
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at line {} column {}", self.line(), self.column())]
pub struct GraphQLParseError {
    message: String,
    span: GraphQLSourceSpan,
    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,
    file_path: Option<PathBuf>,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
            file_path: None,
        }
    }

    /// Builds an error with notes already collected, as the lexer does.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
            file_path: None,
        }
    }

    /// The message without the trailing position.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Shorthand for `self.kind().category()`.
    pub fn category(&self) -> GraphQLErrorCategory {
        self.kind.category()
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// 1-based line of the error position.
    pub fn line(&self) -> usize {
        self.span.start_inclusive.line_number()
    }

    /// 1-based column (in characters) of the error position.
    pub fn column(&self) -> usize {
        self.span.start_inclusive.column_number()
    }

    /// 0-based byte offset of the error position.
    pub fn offset(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// The file the parsed source came from, if the parser was given one.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub(crate) fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a note that points at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes
            .push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a link into the GraphQL spec.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Renders a multi-line diagnostic in the style of rustc.
    ///
    /// ```text
    /// error: expected `}`, found end of input
    ///   --> query.graphql:3:1
    ///    |
    ///  3 |
    ///    | ^
    ///    = note: opening `{` of selection set here
    ///       1 | { user {
    ///         |        -
    /// ```
    ///
    /// Pass the parsed text as `source` to include snippets. Without it only
    /// the message, location, and notes are rendered.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.display_file_name(),
            self.line(),
            self.column(),
        ));

        if let Some(src) = source
            && let Some(snippet) = Self::format_source_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}\n", note.render()));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// `file:line:column: error: message`, for compact logs.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphql:5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.display_file_name(),
            self.line(),
            self.column(),
            self.message,
        )
    }

    fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Gutter, source line, and `^` underline for the primary span.
    /// Spans reaching past their first line are underlined to its end.
    fn format_source_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
        let line = span.start_inclusive.line();
        let text = source_line(source, line)?;
        let gutter = gutter_width(line);

        let col_start = span.start_inclusive.col_utf8();
        let col_end = if span.end_exclusive.line() == line {
            span.end_exclusive.col_utf8()
        } else {
            text.chars().count()
        };
        let carets = "^".repeat(col_end.saturating_sub(col_start).max(1));

        Some(format!(
            "{blank:>gutter$} |\n{number:>gutter$} | {text}\n{blank:>gutter$} | {blank:>col_start$}{carets}\n",
            blank = "",
            number = line + 1,
        ))
    }

    /// Indented source line with a `-` marker under a note's span.
    fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
        let line = span.start_inclusive.line();
        let text = source_line(source, line)?;
        let gutter = gutter_width(line);
        let col = span.start_inclusive.col_utf8();

        Some(format!(
            "     {number:>gutter$} | {text}\n     {blank:>gutter$} | {blank:>col$}-\n",
            blank = "",
            number = line + 1,
        ))
    }
}

fn gutter_width(line: usize) -> usize {
    (line + 1).to_string().len().max(2)
}

/// The text of 0-based `line`, split the way the lexer counts lines (`\n`,
/// `\r\n`, or a lone `\r`), without its terminator.
fn source_line(source: &str, line: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line {
        let brk = memchr::memchr2(b'\n', b'\r', rest.as_bytes())?;
        let terminator_len = if rest[brk..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[brk + terminator_len..];
    }
    let end = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
    Some(&rest[..end])
}
