//! HTTP route for the health endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_health, HealthHandlers};

pub fn health_routes(handlers: HealthHandlers) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .with_state(handlers)
}
