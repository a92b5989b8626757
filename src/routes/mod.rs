// src/routes/mod.rs

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::AppState;

pub mod health;
pub mod root;

// Unmatched paths fall through to axum's empty 404; a known path hit with a
// method other than GET/HEAD gets 405 with an `Allow` header.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
