/// Error types for the quiz state machine
use thiserror::Error;

/// Quiz contract violations. These point at a caller bug, never at a wrong
/// answer, and never change session state.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Question index outside the bank
    #[error("Invalid question index {index} (bank has {total} questions)")]
    InvalidQuestionIndex { index: usize, total: usize },

    /// Chosen option is not one of the question's options
    #[error("Invalid option {option:?} for question {index}")]
    InvalidOption { index: usize, option: String },

    /// Question definition is inconsistent
    #[error("Malformed question {prompt:?}: {reason}")]
    MalformedQuestion { prompt: String, reason: String },

    /// Failed to parse a question bank
    #[error("Failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Type alias for Results using QuizError
pub type Result<T> = std::result::Result<T, QuizError>;
