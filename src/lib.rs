//! Athlete readiness dashboard
//!
//! Loads readiness, sleep and nutrition CSVs on every request, averages them
//! per team or athlete, and serves gauge and table payloads as JSON.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod aggregate;
pub mod api;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod report;
pub mod view;

use loader::{load_dataset, DataPaths, LoadError};
use models::Scope;
use view::DashboardView;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Where the measurement CSVs live; read fresh per request
    pub paths: Arc<DataPaths>,
}

impl AppState {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths: Arc::new(paths),
        }
    }
}

/// Load, normalize, filter and aggregate in one pass.
pub fn load_view(paths: &DataPaths, scope: Scope) -> Result<DashboardView, LoadError> {
    let dataset = normalize::normalize_dataset(load_dataset(paths)?);
    Ok(view::build_view(&dataset, scope))
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::response::Redirect;
    use axum::routing::get;

    Router::new()
        .route("/", get(|| async { Redirect::to("/admin") }))
        .route("/admin", get(api::admin_view))
        .route("/team/:team_name", get(api::team_view))
        .route("/athlete/:athlete_name", get(api::athlete_view))
        .route("/teams", get(api::list_teams))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
