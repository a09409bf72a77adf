use std::sync::Arc;

use tokio::sync::RwLock;

use lexo_storage::RecordStore;
use lexo_transcribe_client::TranscribeClient;
use lexo_translate::{CachedTranslator, TranslateClient};
use lexo_transcript::Transcript;
use lexo_tts::TtsClient;
use lexo_vocab::{FileVocabRepository, VocabBank};

pub type SharedState = Arc<AppState>;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Transcribe(#[from] lexo_transcribe_client::Error),
    #[error(transparent)]
    Translate(#[from] lexo_translate::Error),
    #[error(transparent)]
    Tts(#[from] lexo_tts::Error),
    #[error(transparent)]
    Vocab(#[from] lexo_vocab::Error),
    #[error(transparent)]
    Storage(#[from] lexo_storage::Error),
}

/// Process-wide singletons behind the router.
///
/// The transcript is replaced wholesale on every upload; the vocabulary
/// bank persists through its repository on every mutation; the
/// translator owns the session-lived cache. Handlers get everything
/// through this state, nothing lives in module globals.
pub struct AppState {
    pub transcript: RwLock<Option<Transcript>>,
    pub vocab: RwLock<VocabBank<FileVocabRepository>>,
    pub translator: CachedTranslator<TranslateClient>,
    pub transcribe: TranscribeClient,
    pub tts: Option<TtsClient>,
}

impl AppState {
    pub fn new(
        transcribe: TranscribeClient,
        translator: CachedTranslator<TranslateClient>,
        tts: Option<TtsClient>,
        vocab: VocabBank<FileVocabRepository>,
    ) -> Self {
        Self {
            transcript: RwLock::new(None),
            vocab: RwLock::new(vocab),
            translator,
            transcribe,
            tts,
        }
    }

    /// Wire the state up from service endpoints, banking words under
    /// `records`.
    pub fn connect(
        records: RecordStore,
        transcribe_api_base: &str,
        transcribe_api_key: &str,
        translate_api_base: &str,
        tts_api_base: Option<&str>,
    ) -> Result<Self, StateError> {
        let transcribe = TranscribeClient::builder()
            .api_base(transcribe_api_base)
            .api_key(transcribe_api_key)
            .build()?;
        let translator = CachedTranslator::new(TranslateClient::new(translate_api_base)?);
        let tts = tts_api_base.map(TtsClient::new).transpose()?;
        let vocab = VocabBank::load(FileVocabRepository::new(records))?;

        Ok(Self::new(transcribe, translator, tts, vocab))
    }
}
