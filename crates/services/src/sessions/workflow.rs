use std::sync::Arc;

use repository::QuestionRepository;

use super::intent::{SessionIntent, apply_intent};
use super::loader::QuizLoader;
use super::service::QuizSession;
use super::view::SessionView;
use crate::error::{QuizLoadError, SessionError};

/// Orchestrates the one-shot load and intent dispatch.
///
/// Owns the repository trait object; the presentation layer owns nothing but
/// the views it is handed.
#[derive(Clone)]
pub struct QuizLoopService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Load the playable question set and start a session at question one.
    ///
    /// The load happens once; a failure here is terminal and the session
    /// never starts.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError` when the fetch fails or nothing playable
    /// remains after normalization.
    pub async fn start_session(&self) -> Result<QuizSession, QuizLoadError> {
        let questions = QuizLoader::load(self.repository.as_ref()).await?;
        QuizSession::new(questions).map_err(|_| QuizLoadError::NoPlayableQuestions)
    }

    /// Apply one presentation intent and return the refreshed view.
    ///
    /// # Errors
    ///
    /// Surfaces the session's contract-level rejection; state is unchanged
    /// on error.
    pub fn dispatch(
        &self,
        session: &mut QuizSession,
        intent: SessionIntent,
    ) -> Result<SessionView, SessionError> {
        apply_intent(session, intent)?;
        SessionView::project(session)
    }

    /// Project the session without mutating it.
    ///
    /// # Errors
    ///
    /// Propagates projection failures; unreachable while the session upholds
    /// its cursor invariant.
    pub fn view(&self, session: &QuizSession) -> Result<SessionView, SessionError> {
        SessionView::project(session)
    }
}
