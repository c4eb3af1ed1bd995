use crate::error::{QuizError, Result};
use crate::question::QuizQuestion;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Correct,
    Incorrect { correct_option: String },
    /// The question was already scored this session; nothing changed.
    AlreadyAnswered { correct_option: String },
}

/// Feedback shape for the presentation layer. `correct` is `None` for a
/// repeated submission, which is not graded again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub correct: Option<bool>,
    pub correct_option: String,
}

impl Submission {
    pub fn feedback(&self, question: &QuizQuestion) -> Feedback {
        let correct = match self {
            Submission::Correct => Some(true),
            Submission::Incorrect { .. } => Some(false),
            Submission::AlreadyAnswered { .. } => None,
        };
        Feedback {
            correct,
            correct_option: question.correct_option.clone(),
        }
    }
}

/// Current score against the bank size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub score: u32,
    pub total: usize,
}

/// Per-session quiz state, owned by the caller.
///
/// Each question index moves from unanswered to answered at most once until
/// [`reset`](Self::reset); the score increases by one only on the first,
/// correct submission for an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    score: u32,
    answered: BTreeSet<usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.contains(&index)
    }

    /// Score the answer `chosen` for `questions[index]`.
    ///
    /// Inputs are validated before anything changes: an out-of-range index or
    /// an option not offered by the question is an error and leaves the
    /// session untouched. Resubmitting an answered index is a no-op that
    /// reports `AlreadyAnswered`.
    pub fn submit_answer(
        &mut self,
        index: usize,
        chosen: &str,
        questions: &[QuizQuestion],
    ) -> Result<Submission> {
        let question = questions.get(index).ok_or(QuizError::InvalidQuestionIndex {
            index,
            total: questions.len(),
        })?;
        if !question.has_option(chosen) {
            return Err(QuizError::InvalidOption {
                index,
                option: chosen.to_string(),
            });
        }
        if !self.answered.insert(index) {
            debug!("[AQD] quiz: question {} already answered", index);
            return Ok(Submission::AlreadyAnswered {
                correct_option: question.correct_option.clone(),
            });
        }
        if question.is_correct(chosen) {
            self.score += 1;
            Ok(Submission::Correct)
        } else {
            Ok(Submission::Incorrect {
                correct_option: question.correct_option.clone(),
            })
        }
    }

    /// Like [`submit_answer`](Self::submit_answer) but for hardened
    /// deployments: contract violations are logged and ignored.
    pub fn submit_or_log(
        &mut self,
        index: usize,
        chosen: &str,
        questions: &[QuizQuestion],
    ) -> Option<Submission> {
        match self.submit_answer(index, chosen, questions) {
            Ok(submission) => Some(submission),
            Err(e) => {
                warn!("[AQD] quiz: ignoring submission: {}", e);
                None
            }
        }
    }

    /// Back to a fresh session.
    pub fn reset(&mut self) {
        self.score = 0;
        self.answered.clear();
    }

    pub fn current_score(&self, total: usize) -> ScoreCard {
        ScoreCard {
            score: self.score,
            total,
        }
    }
}
