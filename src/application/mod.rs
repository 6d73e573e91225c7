//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create user, send chat message) are kept apart from
//! query handlers (messages, health, debug).

pub mod handlers;

pub use handlers::{
    ChartService, ChartUnavailable, ChatError, ChatSettings, CompletionPolicy, ComputedChart,
    CreateUserCommand, CreateUserHandler, CreateUserResult, GetHealthHandler, GetMessagesHandler,
    GetUserDebugHandler, HealthReport, SendChatMessageCommand, SendChatMessageHandler,
    SendChatMessageResult, UserDebugView,
};
