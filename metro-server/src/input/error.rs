//! Construction input error types.

/// Errors from reading or validating network construction input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a required value
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A count or fare was not a non-negative integer
    #[error("invalid {expected}: {found:?}")]
    InvalidNumber {
        expected: &'static str,
        found: String,
    },

    /// Two lines share a name
    #[error("duplicate line name: {0}")]
    DuplicateLine(String),

    /// JSON network description could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
