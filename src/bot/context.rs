use std::sync::Arc;

use teloxide::types::User as TelegramUser;

use crate::config::Config;
use crate::database::connection::Stores;
use crate::database::models::User;
use crate::services::subscription::SubscriptionGate;

/// What `/start` should show a user once they are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    SubscriptionRequired,
    Welcome,
}

/// Everything a handler needs, built once at startup and shared by clone.
#[derive(Clone)]
pub struct BotContext {
    pub config: Arc<Config>,
    pub stores: Stores,
    pub gate: SubscriptionGate,
}

impl BotContext {
    pub fn new(config: Arc<Config>, stores: Stores, gate: SubscriptionGate) -> Self {
        Self { config, stores, gate }
    }

    /// Registers a Telegram user in the users store on first contact.
    pub async fn register(&self, user: &TelegramUser) -> Result<bool, sqlx::Error> {
        User::register(
            &self.stores.users.pool,
            user.id.0 as i64,
            &user.first_name,
            user.username.as_deref().unwrap_or(""),
        )
        .await
    }

    /// Registers the user, then checks their subscription.
    ///
    /// A storage error is returned before the gate is consulted.
    pub async fn admit(&self, user: &TelegramUser) -> Result<StartOutcome, sqlx::Error> {
        self.register(user).await?;

        if self.gate.is_subscribed(user.id.0).await {
            Ok(StartOutcome::Welcome)
        } else {
            Ok(StartOutcome::SubscriptionRequired)
        }
    }
}
