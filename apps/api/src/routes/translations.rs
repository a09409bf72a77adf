use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lexo_keyword::clean_word;

use crate::error::{ApiError, Result};
use crate::state::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslationRequest {
    pub word: String,
    pub lang: String,
}

/// Echoes the `(word, lang)` key so responses are never matched up by
/// arrival order. A `null` translation is the visible not-translated
/// state, covering both no-match and lookup failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct TranslationResponse {
    pub word: String,
    pub lang: String,
    pub translation: Option<String>,
}

#[utoipa::path(
    post,
    path = "/translations",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Cache-backed translation lookup", body = TranslationResponse),
        (status = 400, description = "Word empty after cleaning"),
    ),
    tag = "translations",
)]
pub async fn lookup(
    State(state): State<SharedState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>> {
    let word = clean_word(&payload.word);
    if word.is_empty() {
        return Err(ApiError::BadRequest(
            "word is empty after cleaning".to_string(),
        ));
    }

    let translation = state.translator.lookup(&word, &payload.lang).await;

    Ok(Json(TranslationResponse {
        word,
        lang: payload.lang,
        translation,
    }))
}
