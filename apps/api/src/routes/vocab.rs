use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lexo_keyword::clean_word;
use lexo_vocab::{MIN_SAVED_WORD_LEN, SaveOutcome, VocabularyEntry};

use crate::error::{ApiError, Result};
use crate::state::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct VocabListResponse {
    pub entries: Vec<VocabularyEntry>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveWordRequest {
    pub word: String,
    pub lang: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveWordResponse {
    pub outcome: SaveOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<VocabularyEntry>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClearRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[utoipa::path(
    get,
    path = "/vocab",
    responses(
        (status = 200, description = "Banked words, most recent first", body = VocabListResponse),
    ),
    tag = "vocab",
)]
pub async fn list(State(state): State<SharedState>) -> Json<VocabListResponse> {
    let bank = state.vocab.read().await;
    Json(VocabListResponse {
        entries: bank.entries().to_vec(),
    })
}

#[utoipa::path(
    post,
    path = "/vocab",
    request_body = SaveWordRequest,
    responses(
        (status = 200, description = "Save outcome", body = SaveWordResponse),
    ),
    tag = "vocab",
)]
pub async fn save(
    State(state): State<SharedState>,
    Json(payload): Json<SaveWordRequest>,
) -> Result<Json<SaveWordResponse>> {
    // Too-short and duplicate saves are silent no-ops; they must not
    // reach the translation service at all. The store re-checks under
    // the write lock, so a racing save degrades to a duplicate no-op.
    let word = clean_word(&payload.word);
    let eligible = word.chars().count() >= MIN_SAVED_WORD_LEN
        && !state.vocab.read().await.contains(&word);
    let translation = if eligible {
        // Resolved before taking the write lock; a failed lookup still
        // banks the word in its not-translated state.
        state.translator.lookup(&word, &payload.lang).await
    } else {
        None
    };

    let mut bank = state.vocab.write().await;
    let outcome = bank.save(&payload.word, &payload.lang, translation)?;
    let entry = match outcome {
        SaveOutcome::Saved => bank.entries().first().cloned(),
        SaveOutcome::TooShort | SaveOutcome::Duplicate => None,
    };

    Ok(Json(SaveWordResponse { outcome, entry }))
}

#[utoipa::path(
    delete,
    path = "/vocab/{word}",
    params(("word" = String, Path, description = "Word to remove, in any raw form")),
    responses(
        (status = 200, description = "Word removed"),
        (status = 404, description = "Word not banked"),
    ),
    tag = "vocab",
)]
pub async fn remove(State(state): State<SharedState>, Path(word): Path<String>) -> Result<()> {
    let mut bank = state.vocab.write().await;
    if bank.remove(&word)? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("word not banked: {word}")))
    }
}

#[utoipa::path(
    post,
    path = "/vocab/clear",
    request_body = ClearRequest,
    responses(
        (status = 200, description = "Bank cleared"),
        (status = 400, description = "Confirmation missing"),
    ),
    tag = "vocab",
)]
pub async fn clear(
    State(state): State<SharedState>,
    Json(payload): Json<ClearRequest>,
) -> Result<()> {
    if !payload.confirm {
        return Err(ApiError::BadRequest(
            "clearing the vocabulary requires confirm=true".to_string(),
        ));
    }

    state.vocab.write().await.clear()?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/vocab/export",
    responses(
        (status = 200, description = "CSV export of the bank", content_type = "text/csv"),
    ),
    tag = "vocab",
)]
pub async fn export(State(state): State<SharedState>) -> impl IntoResponse {
    let csv = state.vocab.read().await.export_csv();
    ([(header::CONTENT_TYPE, "text/csv")], csv)
}
