//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `chart` - Natal chart normalization and rendering
//! - `profile` - Quiz profile matching and sample charts
//! - `conversation` - Chat turns, system prompt and reply cleanup
//! - `user` - The onboarded user record

pub mod chart;
pub mod conversation;
pub mod foundation;
pub mod profile;
pub mod user;
