#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("data directory not available")]
    DataDirUnavailable,
    #[error("record key must not be empty or contain path separators")]
    InvalidRecordKey,
}
