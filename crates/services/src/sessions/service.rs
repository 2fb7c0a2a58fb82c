use quiz_core::model::{AnswerRecord, AnswerStatus, OptionKey, Question};

use crate::error::SessionError;
use super::progress::SessionProgress;

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory state for one quiz run.
///
/// Owns the ordered question list, the navigation cursor, and one answer slot
/// per question. Answer slots are indexed storage, never a single shared
/// scalar: each question remembers its own answer independently of which
/// question is active, and a recorded answer is final.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<AnswerRecord>>,
}

impl QuizSession {
    /// Create a session positioned at the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            current: 0,
            answers,
        })
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Questions in ordinal order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the active question, always within bounds.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active question.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// The question at `index`, if within bounds.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The recorded answer for the question at `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    /// Answer state of the question at `index`.
    ///
    /// `Unanswered` exactly when no selection has been recorded; otherwise the
    /// status cached on the record at answer time.
    #[must_use]
    pub fn status(&self, index: usize) -> AnswerStatus {
        self.answers
            .get(index)
            .and_then(Option::as_ref)
            .map_or(AnswerStatus::Unanswered, AnswerRecord::status)
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of questions still unanswered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_questions() - self.answered_count()
    }

    /// True once every question has a recorded answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let correct = self
            .answers
            .iter()
            .flatten()
            .filter(|record| record.is_correct())
            .count();
        let answered = self.answered_count();
        SessionProgress {
            total: self.total_questions(),
            answered,
            correct,
            incorrect: answered - correct,
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Record a selection for the question at `index`.
    ///
    /// The first answer is final: once a slot holds a record, further calls
    /// return that record unchanged regardless of the key offered. Otherwise
    /// correctness is computed once against the question's correct key and
    /// the new record is returned.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` for an out-of-bounds index and
    /// `SessionError::InvalidOption` when `key` is not one of the question's
    /// choices; state is unchanged in both cases.
    pub fn select_answer(
        &mut self,
        index: usize,
        key: OptionKey,
    ) -> Result<&AnswerRecord, SessionError> {
        let count = self.questions.len();
        if index >= count {
            return Err(SessionError::IndexOutOfRange { index, count });
        }

        if self.answers[index].is_none() {
            let question = &self.questions[index];
            if !question.has_choice(&key) {
                return Err(SessionError::InvalidOption { index, key });
            }
            let correct = question.correct_key() == &key;
            self.answers[index] = Some(AnswerRecord::new(key, correct));
        }

        self.answers[index].as_ref().ok_or(SessionError::Empty)
    }

    /// Record a selection for the active question.
    ///
    /// # Errors
    ///
    /// Same contract as [`QuizSession::select_answer`].
    pub fn select_current(&mut self, key: OptionKey) -> Result<&AnswerRecord, SessionError> {
        self.select_answer(self.current, key)
    }

    /// Move the cursor to `index`.
    ///
    /// Navigation never touches answer slots: every question's recorded
    /// answer survives moving away and back.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` for an out-of-bounds index;
    /// the cursor is unchanged.
    pub fn go_to_question(&mut self, index: usize) -> Result<(), SessionError> {
        let count = self.questions.len();
        if index >= count {
            return Err(SessionError::IndexOutOfRange { index, count });
        }
        self.current = index;
        Ok(())
    }

    /// Move the cursor to the next question; no wraparound.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AtEnd` at the last question; the cursor is
    /// unchanged.
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        if self.current + 1 >= self.questions.len() {
            return Err(SessionError::AtEnd);
        }
        self.current += 1;
        Ok(self.current)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, QuestionId};

    fn build_question(id: u32, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}"),
            vec![
                Choice::new(OptionKey::new("A"), "Paris", correct == "A"),
                Choice::new(OptionKey::new("B"), "Lyon", correct == "B"),
            ],
        )
        .unwrap()
    }

    fn build_session(count: u32) -> QuizSession {
        let questions = (1..=count).map(|id| build_question(id, "A")).collect();
        QuizSession::new(questions).unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn first_answer_is_final() {
        let mut session = build_session(2);

        let record = session.select_answer(0, OptionKey::new("B")).unwrap();
        assert_eq!(record.status(), AnswerStatus::Incorrect);

        // a later click with the right key never rewrites history
        let record = session.select_answer(0, OptionKey::new("A")).unwrap();
        assert_eq!(record.selected(), &OptionKey::new("B"));
        assert_eq!(session.status(0), AnswerStatus::Incorrect);
    }

    #[test]
    fn invalid_option_leaves_state_unchanged() {
        let mut session = build_session(1);

        let err = session.select_answer(0, OptionKey::new("Z")).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidOption {
                index: 0,
                key: OptionKey::new("Z")
            }
        );
        assert_eq!(session.status(0), AnswerStatus::Unanswered);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut session = build_session(2);
        let err = session.select_answer(5, OptionKey::new("A")).unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 5, count: 2 });
    }

    #[test]
    fn navigation_preserves_recorded_answers() {
        let mut session = build_session(3);

        session.select_answer(0, OptionKey::new("A")).unwrap();
        session.select_answer(1, OptionKey::new("B")).unwrap();

        session.go_to_question(2).unwrap();
        session.go_to_question(0).unwrap();

        assert_eq!(session.status(0), AnswerStatus::Correct);
        assert_eq!(session.status(1), AnswerStatus::Incorrect);
        assert_eq!(session.answer(1).unwrap().selected(), &OptionKey::new("B"));
        assert_eq!(session.status(2), AnswerStatus::Unanswered);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut session = build_session(10);
        session.go_to_question(3).unwrap();

        let err = session.go_to_question(99).unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 99, count: 10 });
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn advance_stops_at_the_last_question() {
        let mut session = build_session(2);

        assert_eq!(session.advance().unwrap(), 1);
        let err = session.advance().unwrap_err();
        assert_eq!(err, SessionError::AtEnd);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn is_complete_requires_every_slot() {
        let mut session = build_session(2);
        assert!(!session.is_complete());

        session.select_answer(0, OptionKey::new("A")).unwrap();
        assert!(!session.is_complete());

        session.select_answer(1, OptionKey::new("B")).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn progress_tallies_correctness() {
        let mut session = build_session(3);
        session.select_answer(0, OptionKey::new("A")).unwrap();
        session.select_answer(1, OptionKey::new("B")).unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.correct, 1);
        assert_eq!(progress.incorrect, 1);
        assert_eq!(progress.remaining, 1);
        assert!(!progress.is_complete);
    }

    #[test]
    fn select_current_follows_the_cursor() {
        let mut session = build_session(2);
        session.advance().unwrap();

        session.select_current(OptionKey::new("A")).unwrap();
        assert_eq!(session.status(1), AnswerStatus::Correct);
        assert_eq!(session.status(0), AnswerStatus::Unanswered);
    }
}
