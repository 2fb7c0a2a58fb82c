use tracing::warn;

use quiz_core::model::Question;
use quiz_core::normalize;
use repository::QuestionRepository;

use crate::error::QuizLoadError;

/// Repository-backed assembly of the playable question set.
pub(crate) struct QuizLoader;

impl QuizLoader {
    /// Fetch every raw record and normalize it into the canonical model.
    ///
    /// Malformed records are excluded and reported; the rest of the load
    /// proceeds. The record's zero-based position supplies ordinals and keys
    /// where the source carries none.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError::Repository` when the fetch itself fails, or
    /// `QuizLoadError::NoPlayableQuestions` when nothing survives
    /// normalization.
    pub async fn load(
        repository: &dyn QuestionRepository,
    ) -> Result<Vec<Question>, QuizLoadError> {
        let records = repository.fetch_records().await?;
        let mut questions = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            match normalize::normalize(position, record) {
                Ok(question) => questions.push(question),
                Err(err) => {
                    warn!(position, error = %err, "excluding malformed question record");
                }
            }
        }

        if questions.is_empty() {
            return Err(QuizLoadError::NoPlayableQuestions);
        }
        Ok(questions)
    }
}
