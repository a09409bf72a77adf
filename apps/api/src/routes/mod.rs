pub(crate) mod keywords;
pub(crate) mod quiz;
pub(crate) mod speak;
pub(crate) mod transcripts;
pub(crate) mod translations;
pub(crate) mod vocab;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/transcripts", post(transcripts::create))
        .route("/transcripts/current", get(transcripts::current))
        .route(
            "/transcripts/current/active-line",
            get(transcripts::active_line),
        )
        .route("/keywords", get(keywords::list))
        .route("/translations", post(translations::lookup))
        .route("/vocab", get(vocab::list).post(vocab::save))
        .route("/vocab/{word}", delete(vocab::remove))
        .route("/vocab/clear", post(vocab::clear))
        .route("/vocab/export", get(vocab::export))
        .route("/quiz/question", post(quiz::question))
        .route("/speak", post(speak::speak))
        .with_state(state)
}
