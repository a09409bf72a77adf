use std::collections::HashMap;

/// Outcome recorded for one `(word, lang)` pair.
///
/// `Miss` is an explicit marker: the pair was looked up and the service
/// had no translation (or the request failed). It is distinct from the
/// pair never having been requested, which `get` reports as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached {
    Found(String),
    Miss,
}

impl Cached {
    pub fn as_option(&self) -> Option<String> {
        match self {
            Cached::Found(t) => Some(t.clone()),
            Cached::Miss => None,
        }
    }
}

/// Session-scoped translation cache keyed by `(word, lang)`.
///
/// Keying by language means a target-language switch needs no
/// invalidation: entries for the old language simply stop being read,
/// and a stale in-flight result lands in a slot nothing looks at.
/// Misses are never retried automatically within a session.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<(String, String), Cached>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str, lang: &str) -> Option<&Cached> {
        self.entries.get(&(word.to_string(), lang.to_string()))
    }

    pub fn insert(&mut self, word: &str, lang: &str, translation: Option<String>) {
        let cached = match translation {
            Some(t) => Cached::Found(t),
            None => Cached::Miss,
        };
        self.entries
            .insert((word.to_string(), lang.to_string()), cached);
    }

    /// Session reset. Not required on language switch (entries are
    /// already partitioned by key), only when the caller wants to start
    /// from an empty cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
