mod document;
mod sync;
mod types;

pub use document::Transcript;
pub use sync::active_index;
pub use types::TranscriptLine;
