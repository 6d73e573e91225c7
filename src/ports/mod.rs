//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AstrologyEngine` - Ephemeris computation for birth charts
//! - `AIProvider` - Chat completions for the astrologer persona
//! - `UserRepository` - Onboarded user records
//! - `ConversationRepository` - Per-user chat history

mod ai_provider;
mod astrology_engine;
mod conversation_repository;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, RequestMetadata,
};
pub use astrology_engine::{AstrologyEngine, EngineError};
pub use conversation_repository::ConversationRepository;
pub use user_repository::UserRepository;
