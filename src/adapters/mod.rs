//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat completion providers (OpenAI-compatible, mock)
//! - `engine` - Astrology engine clients (HTTP, disabled, mock)
//! - `storage` - In-memory user and conversation stores
//! - `http` - axum REST endpoints

pub mod ai;
pub mod engine;
pub mod http;
pub mod storage;
