use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::state::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SpeakRequest {
    pub word: String,
    pub lang: String,
}

#[utoipa::path(
    post,
    path = "/speak",
    request_body = SpeakRequest,
    responses(
        (status = 200, description = "Speech requested; failures are logged, not surfaced"),
    ),
    tag = "speak",
)]
pub async fn speak(State(state): State<SharedState>, Json(payload): Json<SpeakRequest>) {
    match &state.tts {
        Some(tts) => tts.speak(&payload.word, &payload.lang).await,
        None => tracing::debug!(word = %payload.word, "tts_not_configured"),
    }
}
