//! HTTP adapter for service health.

mod dto;
mod handlers;
mod routes;

pub use dto::HealthResponse;
pub use handlers::HealthHandlers;
pub use routes::health_routes;
