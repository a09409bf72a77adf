use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lexo API",
        version = "1.0.0",
        description = "Media-to-vocabulary learning backend: transcription, keyword extraction, cached word translation, a persistent vocabulary bank, and quiz drills"
    ),
    paths(
        crate::routes::transcripts::create,
        crate::routes::transcripts::current,
        crate::routes::transcripts::active_line,
        crate::routes::keywords::list,
        crate::routes::translations::lookup,
        crate::routes::vocab::list,
        crate::routes::vocab::save,
        crate::routes::vocab::remove,
        crate::routes::vocab::clear,
        crate::routes::vocab::export,
        crate::routes::quiz::question,
        crate::routes::speak::speak,
    ),
    components(
        schemas(
            crate::routes::transcripts::TranscriptResponse,
            crate::routes::transcripts::ActiveLineResponse,
            crate::routes::keywords::KeywordResponse,
            crate::routes::translations::TranslationRequest,
            crate::routes::translations::TranslationResponse,
            crate::routes::vocab::VocabListResponse,
            crate::routes::vocab::SaveWordRequest,
            crate::routes::vocab::SaveWordResponse,
            crate::routes::vocab::ClearRequest,
            crate::routes::quiz::QuestionRequest,
            crate::routes::quiz::QuestionResponse,
            crate::routes::speak::SpeakRequest,
            lexo_transcript::TranscriptLine,
            lexo_transcribe_client::SummaryStyle,
            lexo_vocab::VocabularyEntry,
            lexo_vocab::SaveOutcome,
            lexo_quiz::QuizMode,
            lexo_quiz::QuizQuestion,
        )
    ),
    tags(
        (name = "transcripts", description = "Media upload and transcript access"),
        (name = "keywords", description = "Frequency-ranked keyword suggestions"),
        (name = "translations", description = "Cache-backed word translation"),
        (name = "vocab", description = "Persistent vocabulary bank"),
        (name = "quiz", description = "Flashcard and multiple-choice drills"),
        (name = "speak", description = "Text-to-speech passthrough"),
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
