use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lexo_quiz::{QuizMode, QuizQuestion, build_question};
use lexo_vocab::VocabularyEntry;

use crate::error::Result;
use crate::state::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub mode: QuizMode,
    /// Position in the bank; reduced modulo the bank size, so callers
    /// can keep counting up while entries come and go.
    #[serde(default)]
    pub index: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionResponse {
    /// The bank is too small for the requested mode.
    Insufficient { required: usize, available: usize },
    Flashcard { card: VocabularyEntry },
    MultipleChoice { question: QuizQuestion },
}

#[utoipa::path(
    post,
    path = "/quiz/question",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Drill content for the requested mode", body = QuestionResponse),
    ),
    tag = "quiz",
)]
pub async fn question(
    State(state): State<SharedState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>> {
    let bank = state.vocab.read().await;
    let entries = bank.entries();

    if entries.len() < payload.mode.min_entries() {
        return Ok(Json(QuestionResponse::Insufficient {
            required: payload.mode.min_entries(),
            available: entries.len(),
        }));
    }

    let response = match payload.mode {
        QuizMode::Flashcard => QuestionResponse::Flashcard {
            card: entries[payload.index % entries.len()].clone(),
        },
        QuizMode::MultipleChoice => {
            let mut rng = rand::rng();
            match build_question(entries, payload.index, &mut rng) {
                Some(question) => QuestionResponse::MultipleChoice { question },
                None => QuestionResponse::Insufficient {
                    required: payload.mode.min_entries(),
                    available: entries.len(),
                },
            }
        }
    };

    Ok(Json(response))
}
