use crate::error::Result;
use crate::question::QuizQuestion;
use crate::session::{QuizSession, ScoreCard, Submission};
use std::sync::{Arc, Mutex, MutexGuard};

/// A quiz session that may receive concurrent submissions.
///
/// Cloning shares the same session. Each operation holds the lock for its
/// whole duration, so the answered-check and the score increment happen
/// atomically per submission.
#[derive(Debug, Clone, Default)]
pub struct SharedQuizSession {
    inner: Arc<Mutex<QuizSession>>,
}

impl SharedQuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QuizSession> {
        // QuizSession updates never panic midway, so poisoned state is still consistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn submit_answer(
        &self,
        index: usize,
        chosen: &str,
        questions: &[QuizQuestion],
    ) -> Result<Submission> {
        self.lock().submit_answer(index, chosen, questions)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn current_score(&self, total: usize) -> ScoreCard {
        self.lock().current_score(total)
    }

    /// A copy of the session as it is right now.
    pub fn snapshot(&self) -> QuizSession {
        self.lock().clone()
    }
}
