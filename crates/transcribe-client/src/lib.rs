mod error;
mod types;

use std::time::Duration;

use url::Url;

pub use error::Error;
pub use types::{
    SentenceSpan, SummaryStyle, TranscriptionOptions, TranscriptionResult, UtteranceSpan,
};

use types::{JobResponse, JobStatus, SentencesResponse, SubmitRequest, UploadResponse};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
const DEFAULT_MAX_POLLS: u32 = 200;

#[derive(Default)]
pub struct TranscribeClientBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    poll_interval: Option<Duration>,
    max_polls: Option<u32>,
}

impl TranscribeClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    pub fn build(self) -> Result<TranscribeClient, Error> {
        let api_base = Url::parse(self.api_base.as_deref().unwrap_or_default())?;
        Ok(TranscribeClient {
            http: reqwest::Client::new(),
            api_base,
            api_key: self.api_key.unwrap_or_default(),
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
            max_polls: self.max_polls.unwrap_or(DEFAULT_MAX_POLLS),
        })
    }
}

/// Batch client for the external transcription service.
///
/// The flow is upload → submit → poll → sentences; [`TranscribeClient::transcribe`]
/// runs all four. There is no streaming path: lines become visible only
/// once the whole job has completed.
pub struct TranscribeClient {
    http: reqwest::Client,
    api_base: Url,
    api_key: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl TranscribeClient {
    pub fn builder() -> TranscribeClientBuilder {
        TranscribeClientBuilder::default()
    }

    pub async fn transcribe(
        &self,
        media: Vec<u8>,
        options: &TranscriptionOptions,
    ) -> Result<TranscriptionResult, Error> {
        let upload_url = self.upload(media).await?;
        let id = self.submit(&upload_url, options).await?;
        let job = self.poll_until_done(&id).await?;
        let sentences = self.sentences(&id).await?;

        Ok(TranscriptionResult {
            text: job.text.unwrap_or_default(),
            sentences,
            utterances: job
                .utterances
                .map(|us| us.into_iter().map(Into::into).collect()),
            summary: job.summary,
        })
    }

    pub async fn upload(&self, media: Vec<u8>) -> Result<String, Error> {
        let response = self
            .http
            .post(self.api_base.join("v2/upload")?)
            .header("authorization", &self.api_key)
            .body(media)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.upload_url)
    }

    pub async fn submit(
        &self,
        upload_url: &str,
        options: &TranscriptionOptions,
    ) -> Result<String, Error> {
        let request = SubmitRequest {
            audio_url: upload_url,
            speaker_labels: options.speaker_labels,
            summarization: options.summarization,
            summary_type: options.summarization.then_some(options.summary_style),
        };

        let response = self
            .http
            .post(self.api_base.join("v2/transcript")?)
            .header("authorization", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        let body: JobResponse = response.json().await?;
        Ok(body.id)
    }

    async fn poll_until_done(&self, id: &str) -> Result<JobResponse, Error> {
        for attempt in 0..self.max_polls {
            if attempt > 0 {
                tokio::time::sleep(self.poll_interval).await;
            }

            let response = self
                .http
                .get(self.api_base.join(&format!("v2/transcript/{id}"))?)
                .header("authorization", &self.api_key)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(Error::UnexpectedStatus(response.status().as_u16()));
            }

            let job: JobResponse = response.json().await?;
            match job.status {
                JobStatus::Completed => return Ok(job),
                JobStatus::Error => {
                    let reason = job.error.unwrap_or_else(|| "unknown".to_string());
                    tracing::error!(job_id = %id, error = %reason, "transcription_job_failed");
                    return Err(Error::Job(reason));
                }
                JobStatus::Queued | JobStatus::Processing => {
                    tracing::debug!(job_id = %id, attempt = attempt, "transcription_job_pending");
                }
            }
        }

        Err(Error::Timeout {
            attempts: self.max_polls,
        })
    }

    pub async fn sentences(&self, id: &str) -> Result<Vec<SentenceSpan>, Error> {
        let response = self
            .http
            .get(self.api_base.join(&format!("v2/transcript/{id}/sentences"))?)
            .header("authorization", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        let body: SentencesResponse = response.json().await?;
        Ok(body.sentences.into_iter().map(Into::into).collect())
    }
}
