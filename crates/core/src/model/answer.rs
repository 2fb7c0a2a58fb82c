use serde::Serialize;

use crate::model::ids::OptionKey;

//
// ─── ANSWER STATUS ─────────────────────────────────────────────────────────────
//

/// Per-question answer state as seen by the presentation layer.
///
/// A question starts `Unanswered` and moves to `Correct` or `Incorrect` on its
/// first (and only) recorded selection. The transition is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Unanswered,
    Correct,
    Incorrect,
}

impl AnswerStatus {
    /// Returns true once a selection has been recorded.
    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, AnswerStatus::Unanswered)
    }
}

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// The recorded selection for a single question.
///
/// Immutable once created: the first answer is final, so correctness is
/// computed exactly once against the question's correct key and cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    selected: OptionKey,
    correct: bool,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(selected: OptionKey, correct: bool) -> Self {
        Self { selected, correct }
    }

    #[must_use]
    pub fn selected(&self) -> &OptionKey {
        &self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    #[must_use]
    pub fn status(&self) -> AnswerStatus {
        if self.correct {
            AnswerStatus::Correct
        } else {
            AnswerStatus::Incorrect
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
