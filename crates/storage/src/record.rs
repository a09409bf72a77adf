use std::path::{Path, PathBuf};

use crate::Error;
use crate::fs::atomic_write;

/// Durable key-value record storage: one file per key under a base
/// directory. Values are opaque strings; callers own the format.
pub struct RecordStore {
    base: PathBuf,
}

impl RecordStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Store rooted at the platform default data dir.
    pub fn default_base() -> Result<Self, Error> {
        let base = crate::global::compute_default_base().ok_or(Error::DataDirUnavailable)?;
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `None` when the key has never been written. Other IO failures
    /// propagate.
    pub fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.record_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the whole record atomically.
    pub fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.record_path(key)?;
        atomic_write(&path, value)?;
        Ok(())
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, Error> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(Error::InvalidRecordKey);
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}
