/// Errors that occur when converting literal text to a numeric value.
///
/// The parser keeps `Int` and `Float` literals as raw source text; these
/// errors surface from the checked conversions on
/// [`IntValue`](crate::ast::IntValue) and
/// [`FloatValue`](crate::ast::FloatValue).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// GraphQL `Int` must fit in a signed 32-bit integer.
    #[error("invalid GraphQL integer: {0}")]
    Int(String),

    /// GraphQL `Float` must be a finite f64.
    #[error("invalid GraphQL float: {0}")]
    Float(String),
}
