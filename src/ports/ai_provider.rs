//! AI Provider Port - Interface for chat-completion services.
//!
//! Abstracts the LLM behind the astrology chat so handlers can build a
//! request from the system prompt and history without knowing which
//! OpenAI-compatible endpoint answers it. Non-streaming only; every error
//! below ends up as the chat fallback reply.

use async_trait::async_trait;

use crate::domain::conversation::ChatTurn;
use crate::domain::foundation::UserId;

/// Port for AI/LLM provider interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// History followed by the new user turn.
    pub messages: Vec<ChatTurn>,
    /// Sent ahead of `messages` as the system message.
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    /// Creates an empty request with required metadata.
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            metadata,
        }
    }

    /// Appends one turn.
    pub fn with_turn(mut self, turn: ChatTurn) -> Self {
        self.messages.push(turn);
        self
    }

    /// Appends prior chat turns in order.
    pub fn with_history<'a>(mut self, turns: impl IntoIterator<Item = &'a ChatTurn>) -> Self {
        self.messages.extend(turns.into_iter().cloned());
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// Who is asking, for log correlation.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    pub user_id: UserId,
    pub trace_id: String,
}

impl RequestMetadata {
    pub fn new(user_id: UserId, trace_id: impl Into<String>) -> Self {
        Self {
            user_id,
            trace_id: trace_id.into(),
        }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw generated text, reasoning tags included.
    pub content: String,
    /// Model that answered, as reported by the provider.
    pub model: String,
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// Server-side failure or rate limiting.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AIError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ChatRole;

    fn test_metadata() -> RequestMetadata {
        RequestMetadata::new(UserId::new(), "trace-123")
    }

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new(test_metadata())
            .with_turn(ChatTurn::user("Hello"))
            .with_system_prompt("Be helpful")
            .with_max_tokens(4096)
            .with_temperature(0.7)
            .with_top_p(0.95);

        assert_eq!(request.messages, vec![ChatTurn::user("Hello")]);
        assert_eq!(request.system_prompt, Some("Be helpful".to_string()));
        assert_eq!(request.max_tokens, Some(4096));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.top_p, Some(0.95));
    }

    #[test]
    fn history_is_appended_in_order() {
        let turns = vec![ChatTurn::user("first"), ChatTurn::assistant("second")];
        let request = CompletionRequest::new(test_metadata())
            .with_history(&turns)
            .with_turn(ChatTurn::user("third"));

        let roles: Vec<ChatRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]);
        assert_eq!(request.messages[1].content, "second");
    }

    #[test]
    fn ai_error_displays_correctly() {
        assert_eq!(
            AIError::unavailable("Server error 429").to_string(),
            "provider unavailable: Server error 429"
        );
        assert_eq!(
            AIError::timeout(120).to_string(),
            "request timed out after 120s"
        );
    }
}
