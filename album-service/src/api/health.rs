//! Liveness endpoint

use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use super::CompactJson;
use crate::AppState;

/// Liveness report with the current collection size
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub albums: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> CompactJson<HealthResponse> {
    CompactJson(HealthResponse {
        status: "ok",
        module: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        albums: state.store.len().await,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
