//! Flashcard and multiple-choice drills over the vocabulary bank.
//!
//! [`QuizEngine`] holds per-session navigation state (cursor, card
//! side, answer lock) for an embedder that keeps a live session.
//! The HTTP surface is stateless: the client owns the cursor and flip
//! state between requests and the server builds each question on
//! demand via [`build_question`].

mod engine;
mod question;

pub use engine::{AnswerReveal, CardSide, QuizEngine, QuizMode};
pub use question::{MULTIPLE_CHOICE_OPTIONS, QuizQuestion, build_question};
