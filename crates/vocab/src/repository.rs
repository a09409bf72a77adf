use lexo_storage::RecordStore;

use crate::entry::VocabularyEntry;
use crate::error::Error;

const RECORD_KEY: &str = "vocabulary";

/// Isolates the persisted format from the rest of the bank: the whole
/// collection is loaded and saved as one unit (atomic replace-on-write).
pub trait VocabRepository: Send + Sync {
    fn load(&self) -> Result<Vec<VocabularyEntry>, Error>;
    fn save(&self, entries: &[VocabularyEntry]) -> Result<(), Error>;
}

/// JSON-array-under-a-fixed-key repository on durable record storage.
///
/// Absent or unparsable data loads as an empty collection; corruption
/// is recovered silently, never surfaced to the user.
pub struct FileVocabRepository {
    records: RecordStore,
}

impl FileVocabRepository {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }
}

impl VocabRepository for FileVocabRepository {
    fn load(&self) -> Result<Vec<VocabularyEntry>, Error> {
        let Some(raw) = self.records.get(RECORD_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(error = %e, "vocabulary_record_unparsable_starting_empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[VocabularyEntry]) -> Result<(), Error> {
        let raw = serde_json::to_string(entries)?;
        self.records.set(RECORD_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(word: &str) -> VocabularyEntry {
        VocabularyEntry {
            word: word.to_string(),
            translation: Some(format!("{word}-t")),
            language: "es".to_string(),
            saved_at_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn load_with_no_record_is_empty() {
        let dir = tempdir().unwrap();
        let repo = FileVocabRepository::new(RecordStore::new(dir.path()));

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repo = FileVocabRepository::new(RecordStore::new(dir.path()));
        let entries = vec![entry("hello"), entry("world")];

        repo.save(&entries).unwrap();

        assert_eq!(repo.load().unwrap(), entries);
    }

    #[test]
    fn corrupt_record_loads_as_empty() {
        let dir = tempdir().unwrap();
        let records = RecordStore::new(dir.path());
        records.set(RECORD_KEY, "{not json").unwrap();
        let repo = FileVocabRepository::new(records);

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_the_whole_collection() {
        let dir = tempdir().unwrap();
        let repo = FileVocabRepository::new(RecordStore::new(dir.path()));

        repo.save(&[entry("hello"), entry("world")]).unwrap();
        repo.save(&[entry("only")]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].word, "only");
    }
}
