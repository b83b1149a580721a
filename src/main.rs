//! # Channel Gate Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens both stores, starts the
//! nightly cleanup and runs the Telegram dispatcher until Ctrl-C.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use channel_gate_bot::bot::context::BotContext;
use channel_gate_bot::bot::handlers::BotHandler;
use channel_gate_bot::config::Config;
use channel_gate_bot::database::connection::Stores;
use channel_gate_bot::services::cleanup::CleanupService;
use channel_gate_bot::services::subscription::{SubscriptionGate, TelegramDirectory};
use channel_gate_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "channel_gate_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    info!("Starting Channel Gate Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Channel: @{}, Posts DB: {}, Users DB: {}, Membership timeout: {}s",
        config.channel_username,
        config.posts_database_url,
        config.users_database_url,
        config.membership_timeout.as_secs()
    );

    // Initialize databases
    info!("Initializing databases...");
    let stores = Stores::open(&config.posts_database_url, &config.users_database_url).await?;
    info!("Databases initialized successfully");

    // Initialize bot
    let bot = Bot::new(&config.telegram_bot_token);
    let directory = TelegramDirectory::new(bot.clone(), &config.channel_username);
    let gate = SubscriptionGate::new(Arc::new(directory), config.membership_timeout);
    let ctx = BotContext::new(config.clone(), stores.clone(), gate);
    let handler = BotHandler::new(ctx);

    // Nightly purge of yesterday's posts
    let mut cleanup_service = CleanupService::new(stores.posts.clone());
    cleanup_service.start();

    log_system_event("Bot started", Some(&format!("tracking @{}", config.channel_username)));

    Dispatcher::builder(bot, handler.schema())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    if let Err(e) = cleanup_service.stop().await {
        tracing::warn!("Error stopping cleanup service: {}", e);
    }

    log_system_event("Application stopped", None);
    Ok(())
}
