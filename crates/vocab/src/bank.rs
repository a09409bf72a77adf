use crate::error::Error;
use crate::repository::VocabRepository;
use crate::store::{SaveOutcome, VocabularyStore};
use crate::entry::VocabularyEntry;

/// Persisting facade over [`VocabularyStore`]: loads at startup, writes
/// the full collection back through the repository on every mutation.
pub struct VocabBank<R> {
    store: VocabularyStore,
    repository: R,
}

impl<R: VocabRepository> VocabBank<R> {
    /// Load the banked words from the repository. Missing or corrupt
    /// data degrades to an empty bank inside the repository, so startup
    /// only fails on real storage errors.
    pub fn load(repository: R) -> Result<Self, Error> {
        let entries = repository.load()?;
        Ok(Self {
            store: VocabularyStore::from_entries(entries),
            repository,
        })
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        self.store.entries()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, raw_word: &str) -> bool {
        self.store.contains(raw_word)
    }

    pub fn save(
        &mut self,
        raw_word: &str,
        language: &str,
        translation: Option<String>,
    ) -> Result<SaveOutcome, Error> {
        let outcome = self.store.save(raw_word, language, translation);
        if outcome == SaveOutcome::Saved {
            self.persist()?;
        }
        Ok(outcome)
    }

    pub fn remove(&mut self, raw_word: &str) -> Result<bool, Error> {
        let removed = self.store.remove(raw_word);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        self.store.clear();
        self.persist()
    }

    pub fn export_csv(&self) -> String {
        self.store.export_csv()
    }

    fn persist(&self) -> Result<(), Error> {
        self.repository.save(self.store.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FileVocabRepository;
    use lexo_storage::RecordStore;
    use tempfile::tempdir;

    fn bank_at(path: &std::path::Path) -> VocabBank<FileVocabRepository> {
        VocabBank::load(FileVocabRepository::new(RecordStore::new(path))).unwrap()
    }

    #[test]
    fn mutations_survive_a_reload() {
        let dir = tempdir().unwrap();

        {
            let mut bank = bank_at(dir.path());
            bank.save("hello", "ar", Some("مرحبا".into())).unwrap();
            bank.save("world", "ar", None).unwrap();
            bank.remove("world").unwrap();
        }

        let reloaded = bank_at(dir.path());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].word, "hello");
        assert_eq!(reloaded.entries()[0].translation.as_deref(), Some("مرحبا"));
    }

    #[test]
    fn noop_save_does_not_rewrite_storage() {
        let dir = tempdir().unwrap();
        let mut bank = bank_at(dir.path());

        bank.save("hello", "es", None).unwrap();
        let outcome = bank.save("hello", "es", None).unwrap();

        assert_eq!(outcome, SaveOutcome::Duplicate);
        assert_eq!(bank_at(dir.path()).len(), 1);
    }

    #[test]
    fn clear_persists_the_empty_bank() {
        let dir = tempdir().unwrap();
        let mut bank = bank_at(dir.path());
        bank.save("hello", "es", None).unwrap();

        bank.clear().unwrap();

        assert!(bank_at(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_storage_degrades_to_empty_bank() {
        let dir = tempdir().unwrap();
        let records = RecordStore::new(dir.path());
        records.set("vocabulary", "]]garbage[[").unwrap();

        let bank = bank_at(dir.path());
        assert!(bank.is_empty());
    }
}
