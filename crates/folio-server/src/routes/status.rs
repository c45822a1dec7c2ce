//! Status and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status — cache state, configured sheets and the last run.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let service = &state.service;

    Json(serde_json::json!({
        "cache": service.cache_status(),
        "sources": service.sources().configured(),
        "idStrategy": state.config.id_strategy,
        "fetchTimeoutSecs": state.config.fetch_timeout.as_secs(),
        "lastRun": service.last_report(),
    }))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
