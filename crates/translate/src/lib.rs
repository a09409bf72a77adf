mod cache;
mod client;
mod error;
mod service;

use std::future::Future;

pub use cache::{Cached, TranslationCache};
pub use client::{SOURCE_LANG, TranslateClient};
pub use error::Error;
pub use service::CachedTranslator;

/// Word-translation lookup against some backing service.
///
/// `Ok(None)` is an explicit not-found; `Err` is a transport-level
/// failure. Callers decide whether failures are cached (see
/// [`CachedTranslator`]).
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        word: &str,
        target_lang: &str,
    ) -> impl Future<Output = Result<Option<String>, Error>> + Send;
}
