//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chart;
pub mod chat;
pub mod health;
pub mod user;

pub use chart::{ChartService, ChartUnavailable, ComputedChart};
pub use chat::{
    ChatError, ChatSettings, CompletionPolicy, GetMessagesHandler, SendChatMessageCommand,
    SendChatMessageHandler, SendChatMessageResult,
};
pub use health::{GetHealthHandler, HealthReport};
pub use user::{
    CreateUserCommand, CreateUserHandler, CreateUserResult, GetUserDebugHandler, UserDebugView,
};
