use thiserror::Error;

/// A number or field could not be read from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The field was empty (or whitespace only).
    #[error("empty numeric field")]
    Empty,

    /// The field is not a valid 32-bit integer in the given radix.
    #[error("{text:?} is not a valid value for Int32 (radix {radix})")]
    InvalidInteger { text: String, radix: u32 },

    /// The field is not a valid single-precision float.
    #[error("{text:?} is not a valid value for Single")]
    InvalidFloat { text: String },
}

impl ParseError {
    /// The offending input text, when there is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            ParseError::Empty => None,
            ParseError::InvalidInteger { text, .. } | ParseError::InvalidFloat { text } => {
                Some(text)
            }
        }
    }
}
