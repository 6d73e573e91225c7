//! HTTP handler for the health endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::GetHealthHandler;

use super::dto::HealthResponse;

#[derive(Clone)]
pub struct HealthHandlers {
    health_handler: Arc<GetHealthHandler>,
}

impl HealthHandlers {
    pub fn new(health_handler: Arc<GetHealthHandler>) -> Self {
        Self { health_handler }
    }
}

/// GET /health - Liveness plus store sizes
pub async fn get_health(State(handlers): State<HealthHandlers>) -> Result<Response, ApiError> {
    let report = handlers.health_handler.handle().await?;

    let response: HealthResponse = report.into();
    Ok((StatusCode::OK, Json(response)).into_response())
}
