#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("transcription job failed: {0}")]
    Job(String),

    #[error("transcription job did not complete within {attempts} polls")]
    Timeout { attempts: u32 },
}
