//! Dashboard views: all teams, one team, one athlete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::aggregate::team_names;
use crate::loader::{load_dataset, LoadError};
use crate::models::Scope;
use crate::normalize::normalize_dataset;
use crate::view::DashboardView;
use crate::{load_view, AppState};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

async fn render(state: AppState, scope: Scope) -> Result<Json<DashboardView>, ApiError> {
    info!("rendering dashboard for {}", scope.label());
    let paths = state.paths.clone();
    let view = tokio::task::spawn_blocking(move || load_view(&paths, scope)).await??;
    Ok(Json(view))
}

/// GET /admin
pub async fn admin_view(State(state): State<AppState>) -> Result<Json<DashboardView>, ApiError> {
    render(state, Scope::All).await
}

/// GET /team/:team_name
///
/// Team names match regardless of case and surrounding whitespace.
pub async fn team_view(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> Result<Json<DashboardView>, ApiError> {
    render(state, Scope::Team(team_name)).await
}

/// GET /athlete/:athlete_name
pub async fn athlete_view(
    State(state): State<AppState>,
    Path(athlete_name): Path<String>,
) -> Result<Json<DashboardView>, ApiError> {
    render(state, Scope::Athlete(athlete_name)).await
}

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let paths = state.paths.clone();
    let teams = tokio::task::spawn_blocking(move || {
        load_dataset(&paths).map(|dataset| team_names(&normalize_dataset(dataset)))
    })
    .await??;
    Ok(Json(teams))
}
