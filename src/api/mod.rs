//! HTTP API handlers

pub mod health;
pub mod views;

pub use health::health_routes;
pub use views::{admin_view, athlete_view, list_teams, team_view, ApiError};
