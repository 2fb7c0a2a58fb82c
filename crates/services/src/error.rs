//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::OptionKey;
use repository::LoadError;

/// Errors emitted while assembling the playable question set.
///
/// Both variants are terminal: the session never starts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoadError {
    #[error(transparent)]
    Repository(#[from] LoadError),
    #[error("no playable questions after normalization")]
    NoPlayableQuestions,
}

/// Errors emitted by the quiz session.
///
/// These are contract-level rejections and every one of them leaves session
/// state unchanged. The presentation layer never offers invalid choices in
/// normal operation, so they act as defensive assertions rather than
/// user-facing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("option {key} is not offered by question at index {index}")]
    InvalidOption { index: usize, key: OptionKey },

    #[error("question index {index} out of range for {count} questions")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("already at the last question")]
    AtEnd,
}
