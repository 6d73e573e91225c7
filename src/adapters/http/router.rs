//! Assembles the full HTTP application.

use std::time::Duration;

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use super::chat::{chat_routes, ChatHandlers};
use super::health::{health_routes, HealthHandlers};
use super::users::{user_routes, UserHandlers};

/// Handler bundles for every endpoint group.
#[derive(Clone)]
pub struct AppHandlers {
    pub users: UserHandlers,
    pub chat: ChatHandlers,
    pub health: HealthHandlers,
}

/// Builds the router with CORS, request timeout and tracing applied.
pub fn app_router(handlers: AppHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .merge(user_routes(handlers.users))
        .merge(chat_routes(handlers.chat))
        .merge(health_routes(handlers.health))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

/// Listed origins when configured, otherwise any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

