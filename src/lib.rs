// src/lib.rs

use std::sync::Arc;

pub mod config;
pub mod models;
pub mod routes;
pub mod server;
pub mod shutdown;

use config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
