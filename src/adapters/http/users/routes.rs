//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_user, get_user_debug, UserHandlers};

/// Creates the user router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/api/create-user", post(create_user))
        .route("/api/debug/:user_id", get(get_user_debug))
        .with_state(handlers)
}
