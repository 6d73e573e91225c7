//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own dto/handlers/routes module; `router`
//! merges them and applies the cross-cutting layers.

pub mod chat;
pub mod error;
pub mod health;
pub mod router;
pub mod users;

pub use chat::{chat_routes, ChatHandlers};
pub use error::{ApiError, ErrorResponse};
pub use health::{health_routes, HealthHandlers};
pub use router::{app_router, AppHandlers};
pub use users::{user_routes, UserHandlers};
