//! Quiz scoring state machine for the dashboard's quiz page.
//!
//! A [`QuizSession`] is an explicit, caller-owned value: one per user
//! session, created fresh, mutated only through [`QuizSession::submit_answer`]
//! and [`QuizSession::reset`]. The crate holds no global state.

pub mod error;
pub mod question;
pub mod session;
pub mod shared;

pub use error::QuizError;
pub use question::{default_questions, load_questions, QuizQuestion};
pub use session::{Feedback, QuizSession, ScoreCard, Submission};
pub use shared::SharedQuizSession;
