//! Structural parse errors.
//!
//! Parsing stops at the first problem; there is no recovery and no partial
//! tree. Evaluation never produces errors, only IEEE-754 values.

use thiserror::Error;

/// Result of a parse step.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `(` with no matching `)`.
    #[error("unmatched bracket at offset {position} in `{fragment}`")]
    UnmatchedBracket { fragment: String, position: usize },

    /// A `&...;` placeholder whose interior is not an index into the bracket heap.
    #[error("invalid bracket placeholder `{token}`")]
    InvalidPlaceholderIndex { token: String },

    /// A fragment matching none of the recognised forms, including empty operands.
    #[error("unexpected end of expression at `{fragment}`")]
    UnexpectedEnd { fragment: String },
}

impl ParseError {
    pub(crate) fn unexpected_end(fragment: &str) -> Self {
        ParseError::UnexpectedEnd {
            fragment: fragment.to_owned(),
        }
    }

    /// Stable code for searching and reporting.
    ///
    /// - `E1001`: unmatched bracket
    /// - `E1002`: invalid placeholder index
    /// - `E1003`: unexpected end of expression
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnmatchedBracket { .. } => "E1001",
            ParseError::InvalidPlaceholderIndex { .. } => "E1002",
            ParseError::UnexpectedEnd { .. } => "E1003",
        }
    }
}
