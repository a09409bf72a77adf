mod error;
mod openapi;
mod routes;
mod state;

use axum::Router;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

pub use state::{AppState, SharedState, StateError};

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/openapi.json", axum::routing::get(openapi_json))
        .merge(routes::router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(openapi::openapi())
}

async fn health() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
