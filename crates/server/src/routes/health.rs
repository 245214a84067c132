// crates/server/src/routes/health.rs
//! Liveness plus store reachability.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthReport {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub database: String,
    /// Zone that "today" is resolved in.
    pub timezone: String,
}

/// GET /api/health
///
/// 503 when the database is unreachable, so a supervisor can restart us.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let (code, status, database) = match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok".to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", e.to_string())
        }
    };

    let report = HealthReport {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        database,
        timezone: state.timezone.name().to_string(),
    };
    (code, Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
