use quiz_core::model::OptionKey;

use super::service::QuizSession;
use crate::error::SessionError;

/// Discrete user intents relayed by the presentation layer.
///
/// All session mutation flows through these serialized events; the UI never
/// mutates state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    /// Select an option for the active question.
    Select(OptionKey),
    /// Jump to the question at the given index.
    GoTo(usize),
    /// Move to the next question.
    Next,
}

/// Applies one intent to the session.
///
/// # Errors
///
/// Surfaces the underlying session rejection (`InvalidOption`,
/// `IndexOutOfRange`, `AtEnd`); state is unchanged on error.
pub fn apply_intent(session: &mut QuizSession, intent: SessionIntent) -> Result<(), SessionError> {
    match intent {
        SessionIntent::Select(key) => session.select_current(key).map(|_| ()),
        SessionIntent::GoTo(index) => session.go_to_question(index),
        SessionIntent::Next => session.advance().map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerStatus, Choice, Question, QuestionId};

    fn build_session() -> QuizSession {
        let questions = (1..=2)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Q{id}"),
                    vec![
                        Choice::new(OptionKey::new("A"), "yes", true),
                        Choice::new(OptionKey::new("B"), "no", false),
                    ],
                )
                .unwrap()
            })
            .collect();
        QuizSession::new(questions).unwrap()
    }

    #[test]
    fn select_intent_targets_the_active_question() {
        let mut session = build_session();
        apply_intent(&mut session, SessionIntent::GoTo(1)).unwrap();
        apply_intent(&mut session, SessionIntent::Select(OptionKey::new("A"))).unwrap();

        assert_eq!(session.status(1), AnswerStatus::Correct);
        assert_eq!(session.status(0), AnswerStatus::Unanswered);
    }

    #[test]
    fn next_intent_reports_at_end() {
        let mut session = build_session();
        apply_intent(&mut session, SessionIntent::Next).unwrap();

        let err = apply_intent(&mut session, SessionIntent::Next).unwrap_err();
        assert_eq!(err, SessionError::AtEnd);
        assert_eq!(session.current_index(), 1);
    }
}
