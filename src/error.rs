use std::fmt::{self, Display};

/// The error raised when the bracket structure of the input cannot be
/// re-flowed: a closing bracket with no open pair, a closing bracket of the
/// wrong family, or brackets still open at end of input.
///
/// Malformed quoting is deliberately not an error; an unterminated string
/// simply consumes the rest of the input. The error is deterministic for a
/// given input, so callers should fall back to the unformatted text rather
/// than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingError {
    pub message: String,
    pub token_index: Option<usize>,
}

impl FormattingError {
    pub fn new(message: impl Into<String>, token_index: Option<usize>) -> Self {
        let message = message.into();
        let message = if let Some(idx) = token_index {
            format!("{} at token {}", message, idx)
        } else {
            message
        };
        Self { message, token_index }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for FormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FormattingError {}
