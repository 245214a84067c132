//! API route handlers for the daytrack server.

pub mod activities;
pub mod categories;
pub mod health;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET /api/health - Health check
/// - GET|POST /api/categories - List / create categories
/// - GET|PUT|PATCH|DELETE /api/categories/{id} - Single category
/// - GET|POST /api/activities - List / create activities
/// - GET|PUT|PATCH|DELETE /api/activities/{id} - Single activity
/// - GET /api/activities/by-date - Activities touching one calendar day
/// - POST /api/activities/{id}/toggle-complete - Flip completion
/// - GET /api/activities/stats-today - Seconds per category for today
/// - GET /api/activities/ai_suggestions - Coaching suggestions for a day
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", categories::router())
        .nest("/api", activities::router())
        .with_state(state)
}
