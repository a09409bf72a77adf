use serde::{Deserialize, Serialize};

/// Options forwarded to the transcription service when a job is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptionOptions {
    pub speaker_labels: bool,
    pub summarization: bool,
    #[serde(default)]
    pub summary_style: SummaryStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Bullets,
    Gist,
    Paragraph,
}

/// Sentence-level span of recognized speech, times in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}

/// Speaker-attributed utterance span. Only present when speaker labels
/// were requested and the service produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceSpan {
    pub start_ms: i64,
    pub speaker: String,
}

/// Complete outcome of one batch transcription job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub sentences: Vec<SentenceSpan>,
    pub utterances: Option<Vec<UtteranceSpan>>,
    pub summary: Option<String>,
}

// ── Wire DTOs ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub upload_url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest<'a> {
    pub audio_url: &'a str,
    pub speaker_labels: bool,
    pub summarization: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_type: Option<SummaryStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum JobStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobResponse {
    pub id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub utterances: Option<Vec<WireUtterance>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireUtterance {
    pub start: i64,
    pub speaker: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentencesResponse {
    pub sentences: Vec<WireSentence>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSentence {
    pub start: i64,
    pub end: i64,
    pub text: String,
}

impl From<WireSentence> for SentenceSpan {
    fn from(s: WireSentence) -> Self {
        SentenceSpan {
            start_ms: s.start,
            end_ms: s.end,
            text: s.text,
        }
    }
}

impl From<WireUtterance> for UtteranceSpan {
    fn from(u: WireUtterance) -> Self {
        UtteranceSpan {
            start_ms: u.start,
            speaker: u.speaker,
        }
    }
}
