//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when every measurement file is present, "degraded" otherwise
    pub status: &'static str,
    pub version: &'static str,
    pub missing_files: Vec<String>,
}

/// GET /health
///
/// Only checks that the three CSVs exist; it never parses them.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let paths = &state.paths;
    let missing_files: Vec<String> = [&paths.readiness, &paths.sleep, &paths.nutrition]
        .into_iter()
        .filter(|path| !path.is_file())
        .map(|path| path.display().to_string())
        .collect();

    Json(HealthResponse {
        status: if missing_files.is_empty() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        missing_files,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
