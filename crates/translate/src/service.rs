use tokio::sync::RwLock;

use crate::Translator;
use crate::cache::TranslationCache;

/// Cache-backed lookup front for a [`Translator`].
///
/// A hit (including a cached miss) answers immediately. On a miss the
/// service issues one request and records the outcome; request failures
/// are recorded as explicit misses and not retried within the session.
/// Concurrent lookups for the same pair before the first resolves each
/// issue their own request; the last write wins, which is harmless
/// because outcomes for a given pair are stable.
pub struct CachedTranslator<T> {
    translator: T,
    cache: RwLock<TranslationCache>,
}

impl<T: Translator> CachedTranslator<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            cache: RwLock::new(TranslationCache::new()),
        }
    }

    /// Resolved translation for `(word, lang)`, or `None` when the
    /// service has no match or the request failed. Never returns an
    /// error: a failed translation is a visible not-translated state,
    /// not something that should block the rest of the interface.
    pub async fn lookup(&self, word: &str, lang: &str) -> Option<String> {
        if let Some(cached) = self.cache.read().await.get(word, lang) {
            return cached.as_option();
        }

        // The read lock is dropped before the request so a slow service
        // never blocks unrelated lookups.
        let outcome = match self.translator.translate(word, lang).await {
            Ok(translation) => translation,
            Err(e) => {
                tracing::warn!(word = %word, lang = %lang, error = %e, "translation_request_failed");
                None
            }
        };

        self.cache.write().await.insert(word, lang, outcome.clone());
        outcome
    }

    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }
}
