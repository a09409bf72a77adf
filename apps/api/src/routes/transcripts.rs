use axum::Json;
use axum::extract::{Query, State};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use lexo_transcribe_client::{SummaryStyle, TranscriptionOptions};
use lexo_transcript::{Transcript, TranscriptLine};

use crate::error::{ApiError, Result};
use crate::routes::keywords::DEFAULT_KEYWORD_COUNT;
use crate::state::SharedState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CreateTranscriptParams {
    #[serde(default)]
    pub speaker_labels: bool,
    #[serde(default)]
    pub summarization: bool,
    #[serde(default)]
    pub summary_style: SummaryStyle,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptResponse {
    pub lines: Vec<TranscriptLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ActiveLineParams {
    pub time: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveLineResponse {
    pub index: usize,
}

#[utoipa::path(
    post,
    path = "/transcripts",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    params(CreateTranscriptParams),
    responses(
        (status = 200, description = "Transcription completed", body = TranscriptResponse),
        (status = 400, description = "Empty media body"),
        (status = 502, description = "Transcription service failure"),
    ),
    tag = "transcripts",
)]
pub async fn create(
    State(state): State<SharedState>,
    Query(params): Query<CreateTranscriptParams>,
    media: Bytes,
) -> Result<Json<TranscriptResponse>> {
    if media.is_empty() {
        return Err(ApiError::BadRequest("media body is empty".to_string()));
    }

    let options = TranscriptionOptions {
        speaker_labels: params.speaker_labels,
        summarization: params.summarization,
        summary_style: params.summary_style,
    };

    let result = state
        .transcribe
        .transcribe(media.to_vec(), &options)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let transcript = Transcript::from_result(result);
    let keywords = lexo_keyword::extract(transcript.lines(), DEFAULT_KEYWORD_COUNT);
    let response = TranscriptResponse {
        lines: transcript.lines().to_vec(),
        summary: transcript.summary().map(str::to_string),
        keywords,
    };

    // Replace wholesale. Keywords, playback position, and the quiz all
    // re-derive from the new transcript; banked words survive.
    *state.transcript.write().await = Some(transcript);

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/transcripts/current",
    responses(
        (status = 200, description = "Current transcript", body = TranscriptResponse),
        (status = 404, description = "No transcript loaded"),
    ),
    tag = "transcripts",
)]
pub async fn current(State(state): State<SharedState>) -> Result<Json<TranscriptResponse>> {
    let guard = state.transcript.read().await;
    let transcript = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no transcript loaded".to_string()))?;

    Ok(Json(TranscriptResponse {
        lines: transcript.lines().to_vec(),
        summary: transcript.summary().map(str::to_string),
        keywords: lexo_keyword::extract(transcript.lines(), DEFAULT_KEYWORD_COUNT),
    }))
}

#[utoipa::path(
    get,
    path = "/transcripts/current/active-line",
    params(ActiveLineParams),
    responses(
        (status = 200, description = "Index of the active line", body = ActiveLineResponse),
        (status = 404, description = "No transcript loaded"),
    ),
    tag = "transcripts",
)]
pub async fn active_line(
    State(state): State<SharedState>,
    Query(params): Query<ActiveLineParams>,
) -> Result<Json<ActiveLineResponse>> {
    let guard = state.transcript.read().await;
    let transcript = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no transcript loaded".to_string()))?;

    Ok(Json(ActiveLineResponse {
        index: transcript.active_index(params.time),
    }))
}
