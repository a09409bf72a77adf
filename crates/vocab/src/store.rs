use lexo_keyword::clean_word;

use crate::entry::{MIN_SAVED_WORD_LEN, VocabularyEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SaveOutcome {
    Saved,
    /// Cleaned word shorter than [`MIN_SAVED_WORD_LEN`]. Silent no-op,
    /// not an error.
    TooShort,
    /// Word already banked. Silent no-op.
    Duplicate,
}

/// In-memory vocabulary bank: at most one entry per cleaned word,
/// most-recently-saved first.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, raw_word: &str) -> bool {
        let word = clean_word(raw_word);
        self.entries.iter().any(|e| e.word == word)
    }

    /// Bank a word with its already-resolved translation. The raw word
    /// is cleaned first; too-short and duplicate words are no-ops.
    pub fn save(
        &mut self,
        raw_word: &str,
        language: &str,
        translation: Option<String>,
    ) -> SaveOutcome {
        let word = clean_word(raw_word);
        if word.chars().count() < MIN_SAVED_WORD_LEN {
            return SaveOutcome::TooShort;
        }
        if self.entries.iter().any(|e| e.word == word) {
            return SaveOutcome::Duplicate;
        }

        // Newest first: the bank reads as a reverse-chronological list.
        self.entries.insert(
            0,
            VocabularyEntry {
                word,
                translation,
                language: language.to_string(),
                saved_at_ms: chrono::Utc::now().timestamp_millis(),
            },
        );
        SaveOutcome::Saved
    }

    /// Remove by exact cleaned word; absent words are a no-op.
    pub fn remove(&mut self, raw_word: &str) -> bool {
        let word = clean_word(raw_word);
        let before = self.entries.len();
        self.entries.retain(|e| e.word != word);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Tabular export: header plus one row per entry. Embedded commas
    /// in translations are not escaped, so such rows split when
    /// reimported.
    pub fn export_csv(&self) -> String {
        let mut out = String::from("Word,Translation,Language\n");
        for e in &self.entries {
            out.push_str(&format!(
                "{},{},{}\n",
                e.word,
                e.translation.as_deref().unwrap_or(""),
                e.language
            ));
        }
        out
    }
}
