use thiserror::Error;

/// Errors raised while compiling rule definitions into a [`super::RuleSet`].
///
/// Evaluating a value never fails; only building the rules can.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("field `{field}`: invalid pattern: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("field `{field}`: min_length {min} is greater than max_length {max}")]
    InvertedLength { field: String, min: usize, max: usize },

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("field name must not be empty")]
    EmptyFieldName,
}
