/// Words shorter than this (after cleaning) are never banked.
pub const MIN_SAVED_WORD_LEN: usize = 2;

/// A saved word plus its translation, persisted across sessions.
///
/// `word` is always the cleaned form (lowercase, alphabetic-only) of
/// whatever was clicked; the store enforces that at the save boundary.
/// `translation` is `None` when the lookup found no match or failed;
/// the entry is still banked and shows a not-translated state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(default)]
    pub translation: Option<String>,
    pub language: String,
    pub saved_at_ms: i64,
}
