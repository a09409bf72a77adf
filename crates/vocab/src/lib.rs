mod bank;
mod entry;
mod error;
mod repository;
mod store;

pub use bank::VocabBank;
pub use entry::{MIN_SAVED_WORD_LEN, VocabularyEntry};
pub use error::Error;
pub use repository::{FileVocabRepository, VocabRepository};
pub use store::{SaveOutcome, VocabularyStore};
