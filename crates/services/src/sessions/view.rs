use serde::Serialize;

use quiz_core::model::{AnswerStatus, OptionKey, QuestionId};

use super::progress::SessionProgress;
use super::service::QuizSession;
use crate::error::SessionError;

/// Presentation-agnostic projections of session state.
///
/// These are intentionally **not** UI view-models:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The UI renders them as it sees fit and never holds mutable session state.

//
// ─── CHOICE VIEW ───────────────────────────────────────────────────────────────
//

/// One selectable option of the active question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub key: OptionKey,
    pub text: String,
    pub is_selected: bool,
}

//
// ─── QUESTION VIEW ─────────────────────────────────────────────────────────────
//

/// Everything the presentation layer may show for one question.
///
/// `correct_key` is populated only once the question has been answered, so a
/// front end cannot leak the answer ahead of the reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub number: QuestionId,
    pub text: String,
    pub choices: Vec<ChoiceView>,
    pub status: AnswerStatus,
    pub selected: Option<OptionKey>,
    pub correct_key: Option<OptionKey>,
}

impl QuestionView {
    /// Project the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` if `index` names no question.
    pub fn project(session: &QuizSession, index: usize) -> Result<Self, SessionError> {
        let question = session
            .question(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                count: session.total_questions(),
            })?;
        let record = session.answer(index);
        let selected = record.map(|r| r.selected().clone());
        let status = session.status(index);

        let choices = question
            .choices()
            .iter()
            .map(|choice| ChoiceView {
                key: choice.key().clone(),
                text: choice.text().to_owned(),
                is_selected: selected.as_ref() == Some(choice.key()),
            })
            .collect();

        Ok(Self {
            index,
            number: question.id(),
            text: question.text().to_owned(),
            choices,
            status,
            selected,
            correct_key: status
                .is_answered()
                .then(|| question.correct_key().clone()),
        })
    }
}

//
// ─── INDEX PANEL ───────────────────────────────────────────────────────────────
//

/// One entry of the question-jump panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionIndexItem {
    pub index: usize,
    pub number: QuestionId,
    pub status: AnswerStatus,
}

//
// ─── SESSION VIEW ──────────────────────────────────────────────────────────────
//

/// The full read-only projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub current: QuestionView,
    pub index_panel: Vec<QuestionIndexItem>,
    pub progress: SessionProgress,
}

impl SessionView {
    /// Project the whole session around its active question.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError::IndexOutOfRange` from the current-question
    /// projection; the cursor invariant makes this unreachable in practice.
    pub fn project(session: &QuizSession) -> Result<Self, SessionError> {
        let index_panel = session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionIndexItem {
                index,
                number: question.id(),
                status: session.status(index),
            })
            .collect();

        let current = QuestionView::project(session, session.current_index())?;

        Ok(Self {
            current,
            index_panel,
            progress: session.progress(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
