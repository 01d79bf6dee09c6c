//! Domain errors for exercises with input preconditions.

/// Precondition failures reported by the exercise functions.
///
/// Functions without preconditions (e.g. Pig Latin) never produce these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseError {
    #[error("{what} must be a positive number")]
    NonPositive { what: &'static str },
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
    #[error("invalid card '{0}': expected 2-10, J, Q, K or A")]
    InvalidCard(String),
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
    #[error("word index {index} out of range for {len} words")]
    WordIndex { index: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
