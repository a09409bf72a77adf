use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, Result};
use crate::state::SharedState;

pub const DEFAULT_KEYWORD_COUNT: usize = 15;

fn default_count() -> usize {
    DEFAULT_KEYWORD_COUNT
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct KeywordParams {
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KeywordResponse {
    pub keywords: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/keywords",
    params(KeywordParams),
    responses(
        (status = 200, description = "Ranked keywords of the current transcript", body = KeywordResponse),
        (status = 404, description = "No transcript loaded"),
    ),
    tag = "keywords",
)]
pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<KeywordParams>,
) -> Result<Json<KeywordResponse>> {
    let guard = state.transcript.read().await;
    let transcript = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no transcript loaded".to_string()))?;

    Ok(Json(KeywordResponse {
        keywords: lexo_keyword::extract(transcript.lines(), params.count),
    }))
}
