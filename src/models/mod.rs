// src/models/mod.rs

use serde::Serialize;

pub const GREETING: &str = "Hello from Argo Rollouts";

// ───────────────────────────────────────
// GET /
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: String,
}

impl RootResponse {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            message: GREETING,
            version: version.into(),
        }
    }
}

// ───────────────────────────────────────
// GET /health
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
