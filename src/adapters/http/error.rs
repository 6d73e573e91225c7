//! Error responses shared by all HTTP endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::ChatError;
use crate::domain::foundation::DomainError;

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

/// Failures an endpoint can report to the client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InvalidUser,
    MessageRequired,
    UserNotFound,
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUser | ApiError::MessageRequired => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidUser => ErrorResponse::new("INVALID_USER", "Invalid user ID"),
            ApiError::MessageRequired => {
                ErrorResponse::new("MESSAGE_REQUIRED", "Message is required")
            }
            ApiError::UserNotFound => ErrorResponse::new("USER_NOT_FOUND", "User not found"),
            // Store details stay in the logs.
            ApiError::Internal(_) => ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::InvalidUser => ApiError::InvalidUser,
            ChatError::EmptyMessage => ApiError::MessageRequired,
            ChatError::Repository(message) => ApiError::Internal(message),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(error = %cause, "Request failed");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
