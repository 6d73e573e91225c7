//! SendChatMessage command handler.
//!
//! Builds the astrologer prompt from the user's stored chart and history,
//! asks the AI provider for a reply under a [`CompletionPolicy`], and records
//! both turns. Provider failures never reach the caller: they become the
//! fixed fallback reply.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::conversation::{build_system_prompt, strip_reasoning, ChatTurn, FALLBACK_RESPONSE};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, ConversationRepository, RequestMetadata, UserRepository,
};

/// Command to send a chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    /// Raw user id as sent by the client.
    pub user_id: Option<String>,
    pub message: Option<String>,
}

/// Result of a chat exchange.
#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub response: String,
    /// True when the reply is the fallback text.
    pub fell_back: bool,
}

/// Errors surfaced to the caller.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("Invalid user ID")]
    InvalidUser,

    #[error("Message is required")]
    EmptyMessage,

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for ChatError {
    fn from(err: DomainError) -> Self {
        ChatError::Repository(err.to_string())
    }
}

/// How long to wait for the provider and what to say when it fails.
#[derive(Debug, Clone)]
pub struct CompletionPolicy {
    pub timeout: Duration,
    pub fallback_text: String,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            fallback_text: FALLBACK_RESPONSE.to_string(),
        }
    }
}

/// Sampling parameters sent with every completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
            top_p: 0.95,
        }
    }
}

pub struct SendChatMessageHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
    ai_provider: Arc<dyn AIProvider>,
    policy: CompletionPolicy,
    settings: ChatSettings,
}

impl SendChatMessageHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
        ai_provider: Arc<dyn AIProvider>,
    ) -> Self {
        Self {
            users,
            conversations,
            ai_provider,
            policy: CompletionPolicy::default(),
            settings: ChatSettings::default(),
        }
    }

    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, ChatError> {
        // 1. Resolve the user
        let user_id = cmd
            .user_id
            .as_deref()
            .and_then(|raw| raw.parse::<UserId>().ok())
            .ok_or(ChatError::InvalidUser)?;
        let user = self
            .users
            .find(&user_id)
            .await?
            .ok_or(ChatError::InvalidUser)?;

        // 2. Validate the message
        // Sent and stored as received; trimming only decides emptiness.
        let message = cmd.message.unwrap_or_default();
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        info!(%user_id, chars = message.chars().count(), "Chat message received");

        // 3. Ask the provider
        let history = self.conversations.history(&user_id).await?.unwrap_or_default();
        let request = CompletionRequest::new(RequestMetadata::new(user_id, Uuid::new_v4().to_string()))
            .with_system_prompt(build_system_prompt(&user.chart_data))
            .with_history(&history)
            .with_turn(ChatTurn::user(message.clone()))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens)
            .with_top_p(self.settings.top_p);

        let (response, fell_back) = match self.complete(request).await {
            Ok(reply) => (reply, false),
            Err(err) => {
                warn!(%user_id, error = %err, "Completion failed, sending fallback");
                (self.policy.fallback_text.clone(), true)
            }
        };

        // 4. Record both turns
        self.conversations
            .append(
                &user_id,
                vec![ChatTurn::user(message), ChatTurn::assistant(response.clone())],
            )
            .await?;

        info!(%user_id, chars = response.chars().count(), fell_back, "Chat response sent");

        Ok(SendChatMessageResult {
            response,
            fell_back,
        })
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, AIError> {
        let completion = tokio::time::timeout(self.policy.timeout, self.ai_provider.complete(request))
            .await
            .map_err(|_| AIError::timeout(self.policy.timeout.as_secs()))??;

        debug!(model = %completion.model, "Completion received");
        Ok(strip_reasoning(&completion.content))
    }
}
