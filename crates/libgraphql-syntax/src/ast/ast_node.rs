use crate::GraphQLSourceSpan;

/// Append the source text for `span` to `sink` by slicing
/// directly from `source` via byte offsets (zero-copy,
/// lossless).
///
/// Appends nothing if `span` does not describe a range of
/// `source` (e.g. `source` is not the text that was parsed).
pub(crate) fn append_span_source_slice(
    span: &GraphQLSourceSpan,
    sink: &mut String,
    source: &str,
) {
    if let Some(text) = span.slice(source) {
        sink.push_str(text);
    }
}

/// Trait implemented by all AST node types.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, giving each node both inherent
/// methods (no trait import needed) and a trait bound for generic
/// utilities (error formatters, linters, etc.).
///
/// Source reconstruction slices the original text the node was
/// parsed from; nothing is re-printed. Pass the same `&str` that
/// was given to the parser.
pub trait AstNode {
    /// The source range covered by this node, from the start of its
    /// first token to the end of its last token.
    fn span(&self) -> GraphQLSourceSpan;

    /// Append this node's source text to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: &str,
    ) {
        append_span_source_slice(&self.span(), sink, source);
    }

    /// Return this node's source text.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: &str,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}

/// Implements [`AstNode`] (inherently) for node types that store
/// their location in a `span` field.
macro_rules! impl_ast_node_via_span_field {
    ($($node:ty),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl crate::ast::AstNode for $node {
                pub fn span(&self) -> crate::GraphQLSourceSpan {
                    self.span
                }

                pub fn append_source(&self, sink: &mut String, source: &str);

                pub fn to_source(&self, source: &str) -> String;
            }
        )*
    };
}

pub(crate) use impl_ast_node_via_span_field;
