#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] lexo_storage::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
