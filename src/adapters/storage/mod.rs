//! Storage Adapters
//!
//! In-memory implementations of the user and conversation repository
//! ports. State lives for the lifetime of the process.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryConversationRepository, InMemoryUserRepository};
//!
//! let users = Arc::new(InMemoryUserRepository::new());
//! let conversations = Arc::new(InMemoryConversationRepository::new());
//! ```

mod in_memory_conversation_repository;
mod in_memory_user_repository;

pub use in_memory_conversation_repository::InMemoryConversationRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
