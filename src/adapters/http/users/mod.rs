//! HTTP adapter for user onboarding and inspection.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateUserRequest, CreateUserResponse, UserDebugResponse};
pub use handlers::UserHandlers;
pub use routes::user_routes;
