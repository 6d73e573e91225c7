//! Oracool server entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use oracool::adapters::ai::{OpenAIConfig, OpenAIProvider};
use oracool::adapters::engine::{DisabledAstrologyEngine, HttpAstrologyEngine};
use oracool::adapters::http::{
    app_router, AppHandlers, ChatHandlers, HealthHandlers, UserHandlers,
};
use oracool::adapters::storage::{InMemoryConversationRepository, InMemoryUserRepository};
use oracool::application::{
    ChartService, ChatSettings, CompletionPolicy, CreateUserHandler, GetHealthHandler,
    GetMessagesHandler, GetUserDebugHandler, SendChatMessageHandler,
};
use oracool::config::AppConfig;
use oracool::domain::conversation::FALLBACK_RESPONSE;
use oracool::ports::{AIProvider, AstrologyEngine, ConversationRepository, UserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let handlers = build_handlers(&config)?;
    let app = app_router(handlers, &config.server);

    info!(%addr, environment = ?config.server.environment, "Starting Oracool");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_handlers(config: &AppConfig) -> Result<AppHandlers> {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let conversations: Arc<dyn ConversationRepository> =
        Arc::new(InMemoryConversationRepository::new());

    let engine: Arc<dyn AstrologyEngine> = match config.engine.url() {
        Some(url) => {
            info!(url, "Using HTTP astrology engine");
            Arc::new(HttpAstrologyEngine::new(url, config.engine.timeout())?)
        }
        None => {
            warn!("No astrology engine configured; users will get sample charts");
            Arc::new(DisabledAstrologyEngine)
        }
    };

    if !config.ai.has_api_key() {
        warn!("No AI API key configured; chat will answer with the fallback reply");
    }
    let api_key = config
        .ai
        .api_key
        .as_ref()
        .map(|key| key.expose_secret().clone())
        .unwrap_or_default();
    let ai: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout()),
    )?);

    let charts = Arc::new(ChartService::new(engine));

    let send_handler = SendChatMessageHandler::new(users.clone(), conversations.clone(), ai)
        .with_policy(CompletionPolicy {
            timeout: config.ai.timeout(),
            fallback_text: FALLBACK_RESPONSE.to_string(),
        })
        .with_settings(ChatSettings {
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
            top_p: config.ai.top_p,
        });

    Ok(AppHandlers {
        users: UserHandlers::new(
            Arc::new(CreateUserHandler::new(
                charts,
                users.clone(),
                conversations.clone(),
            )),
            Arc::new(GetUserDebugHandler::new(users.clone(), conversations.clone())),
        ),
        chat: ChatHandlers::new(
            Arc::new(send_handler),
            Arc::new(GetMessagesHandler::new(conversations.clone())),
        ),
        health: HealthHandlers::new(Arc::new(GetHealthHandler::new(users, conversations))),
    })
}
