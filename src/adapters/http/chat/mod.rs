//! HTTP adapter for the astrologer chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, MessagesResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
