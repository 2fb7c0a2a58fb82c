use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{OptionKey, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question has no options")]
    NoChoices,

    #[error("duplicate option key: {0}")]
    DuplicateKey(OptionKey),

    #[error("question has no option marked correct")]
    NoCorrectChoice,

    #[error("question has more than one option marked correct")]
    MultipleCorrectChoices,
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One answer option of a question.
///
/// The correctness flag is computed once during normalization from the source
/// answer indicator and is never recomputed from mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    key: OptionKey,
    text: String,
    is_correct: bool,
}

impl Choice {
    #[must_use]
    pub fn new(key: OptionKey, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            key,
            text: text.into(),
            is_correct,
        }
    }

    #[must_use]
    pub fn key(&self) -> &OptionKey {
        &self.key
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A canonical multiple-choice question.
///
/// Created once from the repository at load time and immutable thereafter.
/// Exactly one choice carries the correct flag; choice keys are unique within
/// the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<Choice>,
}

impl Question {
    /// Builds a question, validating the canonical-model invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is empty, there are no choices,
    /// a key repeats, or the correct flag is not set on exactly one choice.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].iter().any(|seen| seen.key() == choice.key()) {
                return Err(QuestionError::DuplicateKey(choice.key().clone()));
            }
        }

        match choices.iter().filter(|choice| choice.is_correct()).count() {
            0 => return Err(QuestionError::NoCorrectChoice),
            1 => {}
            _ => return Err(QuestionError::MultipleCorrectChoices),
        }

        Ok(Self { id, text, choices })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Looks up a choice by key.
    #[must_use]
    pub fn choice(&self, key: &OptionKey) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.key() == key)
    }

    /// Returns true if `key` names one of this question's choices.
    #[must_use]
    pub fn has_choice(&self, key: &OptionKey) -> bool {
        self.choice(key).is_some()
    }

    /// Key of the single correct choice.
    #[must_use]
    pub fn correct_key(&self) -> &OptionKey {
        // the constructor guarantees exactly one correct choice
        self.choices
            .iter()
            .find(|choice| choice.is_correct())
            .map(Choice::key)
            .unwrap_or_else(|| self.choices[0].key())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(key: &str, text: &str, correct: bool) -> Choice {
        Choice::new(OptionKey::new(key), text, correct)
    }

    #[test]
    fn question_fails_if_text_empty() {
        let err = Question::new(
            QuestionId::new(1),
            "   ",
            vec![choice("A", "Paris", true), choice("B", "Lyon", false)],
        )
        .unwrap_err();

        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn question_fails_without_choices() {
        let err = Question::new(QuestionId::new(1), "Capital of France?", vec![]).unwrap_err();
        assert_eq!(err, QuestionError::NoChoices);
    }

    #[test]
    fn question_fails_on_duplicate_keys() {
        let err = Question::new(
            QuestionId::new(1),
            "Capital of France?",
            vec![choice("A", "Paris", true), choice("a", "Lyon", false)],
        )
        .unwrap_err();

        assert_eq!(err, QuestionError::DuplicateKey(OptionKey::new("A")));
    }

    #[test]
    fn question_requires_exactly_one_correct_choice() {
        let none = Question::new(
            QuestionId::new(1),
            "Capital of France?",
            vec![choice("A", "Paris", false), choice("B", "Lyon", false)],
        )
        .unwrap_err();
        assert_eq!(none, QuestionError::NoCorrectChoice);

        let both = Question::new(
            QuestionId::new(1),
            "Capital of France?",
            vec![choice("A", "Paris", true), choice("B", "Lyon", true)],
        )
        .unwrap_err();
        assert_eq!(both, QuestionError::MultipleCorrectChoices);
    }

    #[test]
    fn valid_question_exposes_correct_key() {
        let question = Question::new(
            QuestionId::new(3),
            "Capital of France?",
            vec![choice("A", "Paris", true), choice("B", "Lyon", false)],
        )
        .unwrap();

        assert_eq!(question.id(), QuestionId::new(3));
        assert_eq!(question.correct_key(), &OptionKey::new("A"));
        assert!(question.has_choice(&OptionKey::new("B")));
        assert!(!question.has_choice(&OptionKey::new("C")));
    }
}
