use rand::Rng;

use lexo_vocab::VocabularyEntry;

use crate::question::{QuizQuestion, build_question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    Flashcard,
    MultipleChoice,
}

impl QuizMode {
    /// Minimum bank size before this mode can form anything to drill.
    pub fn min_entries(self) -> usize {
        match self {
            QuizMode::Flashcard => 1,
            QuizMode::MultipleChoice => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

/// What the engine reveals once an option is picked: the correct entry
/// is always highlighted as correct, the user's wrong pick (if any) as
/// wrong, and further selection is locked until the next question.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnswerReveal {
    pub selected_word: String,
    pub correct_word: String,
    pub is_correct: bool,
}

/// Drill-navigation state machine over the vocabulary bank.
///
/// The engine does not own the entries; callers pass the bank's current
/// slice into each operation. The cursor is unbounded and reduced
/// modulo the bank size at read time, so a bank that shrinks mid-quiz
/// (entries removed underneath an active drill) can never index out of
/// range; it degrades to the insufficient-entries state instead.
pub struct QuizEngine {
    mode: QuizMode,
    cursor: usize,
    side: CardSide,
    answered: Option<AnswerReveal>,
}

impl QuizEngine {
    pub fn new(mode: QuizMode) -> Self {
        Self {
            mode,
            cursor: 0,
            side: CardSide::Front,
            answered: None,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Switching modes keeps the cursor but resets per-card state.
    pub fn set_mode(&mut self, mode: QuizMode) {
        self.mode = mode;
        self.side = CardSide::Front;
        self.answered = None;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn has_enough(&self, bank_size: usize) -> bool {
        bank_size >= self.mode.min_entries()
    }

    // ── Flashcards ───────────────────────────────────────────────────────────

    /// Current card, or `None` when the bank is too small for the mode.
    pub fn current_card<'a>(&self, entries: &'a [VocabularyEntry]) -> Option<&'a VocabularyEntry> {
        if !self.has_enough(entries.len()) || entries.is_empty() {
            return None;
        }
        entries.get(self.cursor % entries.len())
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    /// Advance to the next card; wraps over the bank size at read time.
    pub fn next(&mut self) {
        self.cursor += 1;
        self.side = CardSide::Front;
        self.answered = None;
    }

    /// Step back one card, clamped at the first.
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.side = CardSide::Front;
        self.answered = None;
    }

    // ── Multiple choice ──────────────────────────────────────────────────────

    /// Question for the current cursor, or `None` below two entries.
    pub fn question<R: Rng + ?Sized>(
        &self,
        entries: &[VocabularyEntry],
        rng: &mut R,
    ) -> Option<QuizQuestion> {
        build_question(entries, self.cursor, rng)
    }

    /// Record the user's pick and reveal correctness. Returns `None`
    /// when already answered; selection is locked until
    /// [`QuizEngine::next`].
    pub fn select(&mut self, question: &QuizQuestion, option_word: &str) -> Option<AnswerReveal> {
        if self.answered.is_some() {
            return None;
        }

        let reveal = AnswerReveal {
            selected_word: option_word.to_string(),
            correct_word: question.correct.word.clone(),
            is_correct: option_word == question.correct.word,
        };
        self.answered = Some(reveal.clone());
        Some(reveal)
    }

    pub fn answered(&self) -> Option<&AnswerReveal> {
        self.answered.as_ref()
    }
}
