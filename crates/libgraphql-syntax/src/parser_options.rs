/// Configuration for a single [`GraphQLParser`](crate::GraphQLParser) run.
///
/// Fields missing from a deserialized configuration fall back to their
/// [`Default`] values, so a partial config such as `{"max_depth": 16}` is
/// valid in any serde format.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ParserOptions {
    /// When `false`, `#` comments are kept and collected into
    /// [`Document::comments`](crate::ast::Document::comments).
    pub ignore_comments: bool,

    /// When `false`, any `extend ...` definition is a syntax error.
    pub allow_extensions: bool,

    /// Maximum nesting of selection sets, list/non-null types, and
    /// list/object values.
    pub max_depth: usize,
}

impl ParserOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn with_ignore_comments(mut self, ignore_comments: bool) -> Self {
        self.ignore_comments = ignore_comments;
        self
    }

    pub fn with_allow_extensions(mut self, allow_extensions: bool) -> Self {
        self.allow_extensions = allow_extensions;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            ignore_comments: true,
            allow_extensions: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
