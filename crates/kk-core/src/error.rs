use std::fmt;

/// The only failure mode of the clock: an instant that cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Malformed { input: String, reason: String },
    MissingOffset { input: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed { input, reason } => write!(
                f,
                "invalid datetime '{input}': {reason}; use ISO-8601 like '2024-05-10T06:45:41.888Z'"
            ),
            ParseError::MissingOffset { input } => write!(
                f,
                "datetime '{input}' has no UTC offset; append 'Z' or '+00:00'"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

pub type Result<T> = std::result::Result<T, ParseError>;
