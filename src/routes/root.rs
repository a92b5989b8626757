// src/routes/root.rs

use axum::{extract::State, Json};
use crate::AppState;
use crate::models::RootResponse;

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::new(state.config.version.as_str()))
}
