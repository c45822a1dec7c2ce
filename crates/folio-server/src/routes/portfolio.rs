//! Portfolio content routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use folio_core::{ContentModel, ProjectRecord};
use folio_ingest::{filter_by_technology, technology_filters, ALL_TECHNOLOGIES};
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/refresh", post(refresh_portfolio))
        .route("/portfolio/cached", get(get_cached))
        .route("/projects", get(get_projects))
        .route("/technologies", get(get_technologies))
}

#[derive(Debug, Deserialize)]
struct ProjectsQuery {
    tech: Option<String>,
}

/// GET /api/portfolio — content model, cache first.
async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<ContentModel> {
    Json(state.service.load(false).await)
}

/// POST /api/portfolio/refresh — ingest ignoring the cache.
async fn refresh_portfolio(State(state): State<Arc<AppState>>) -> Json<ContentModel> {
    Json(state.service.refresh().await)
}

/// GET /api/portfolio/cached — last cached model, even if stale.
async fn get_cached(State(state): State<Arc<AppState>>) -> Response {
    match state.service.cached_snapshot() {
        Some(snapshot) => Json(snapshot).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "No cached portfolio" })),
        )
            .into_response(),
    }
}

/// GET /api/projects?tech= — projects using a technology.
async fn get_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Json<Vec<ProjectRecord>> {
    let content = state.service.load(false).await;
    let tech = query.tech.as_deref().unwrap_or(ALL_TECHNOLOGIES);
    Json(
        filter_by_technology(&content.projects, tech)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/technologies — filter bar entries.
async fn get_technologies(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let content = state.service.load(false).await;
    Json(technology_filters(&content.projects))
}
