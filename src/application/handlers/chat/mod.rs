//! Chat application handlers.

mod get_messages;
mod send_chat_message;

pub use get_messages::GetMessagesHandler;
pub use send_chat_message::{
    ChatError, ChatSettings, CompletionPolicy, SendChatMessageCommand, SendChatMessageHandler,
    SendChatMessageResult,
};
