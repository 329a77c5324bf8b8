pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract", post(handlers::handle_extract))
        .route("/match-score", post(handlers::handle_match_score))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
