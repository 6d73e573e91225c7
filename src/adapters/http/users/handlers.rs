//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::{CreateUserHandler, GetUserDebugHandler};
use crate::domain::foundation::UserId;

use super::dto::{CreateUserRequest, CreateUserResponse, UserDebugResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    create_handler: Arc<CreateUserHandler>,
    debug_handler: Arc<GetUserDebugHandler>,
}

impl UserHandlers {
    pub fn new(
        create_handler: Arc<CreateUserHandler>,
        debug_handler: Arc<GetUserDebugHandler>,
    ) -> Self {
        Self {
            create_handler,
            debug_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/create-user - Onboard a user and compute their chart
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let result = handlers.create_handler.handle(req.into()).await?;
    let response: CreateUserResponse = result.into();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /api/debug/:user_id - Stored record and message count
pub async fn get_user_debug(
    State(handlers): State<UserHandlers>,
    Path(raw_user_id): Path<String>,
) -> Result<Response, ApiError> {
    let user_id: UserId = raw_user_id.parse().map_err(|_| ApiError::UserNotFound)?;

    match handlers.debug_handler.handle(&user_id).await? {
        Some(view) => {
            let response: UserDebugResponse = view.into();
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        None => Err(ApiError::UserNotFound),
    }
}
