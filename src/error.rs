//! Error types for the quiz core and word list loading.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised while splitting a word list into records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("can't parse line {line}: {row} (too few fields)")]
    TooFewFields { line: usize, row: String },

    #[error("can't parse line {line}: {row} (too many fields)")]
    TooManyFields { line: usize, row: String },

    #[error("word list is empty")]
    Empty,

    #[error("entry '{word}' can't be written as a text line")]
    Unrepresentable { word: String },
}

impl ParseError {
    /// Content of the offending line, if the error points at one.
    pub fn row(&self) -> Option<&str> {
        match self {
            Self::TooFewFields { row, .. } | Self::TooManyFields { row, .. } => Some(row),
            Self::Empty | Self::Unrepresentable { .. } => None,
        }
    }
}

/// Errors that can occur while building or driving a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("a deck needs at least {required} words, got {found}")]
    NotEnoughWords { found: usize, required: usize },

    #[error("no active card: call get_next before validating an option")]
    NoActiveCard,

    #[error("the current card has already been answered")]
    AlreadyAnswered,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
