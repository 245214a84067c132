// crates/server/src/lib.rs
//! Daytrack server library.
//!
//! Axum-based HTTP server exposing categories, activities, day-scoped
//! statistics and LLM coaching suggestions as a JSON API.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Cli;
pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::{middleware, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes under `/api`
/// - CORS headers and `OPTIONS` short-circuit
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(api_routes(state))
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
}

/// Wrap the app so `/api/categories/` and `/api/categories` hit the same route.
///
/// Path normalization has to run before routing, so it wraps the router
/// instead of being layered onto it.
pub fn into_service(app: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app)
}

// ============================================================================
// Integration Tests
// ============================================================================
