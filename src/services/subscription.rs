//! Mandatory-subscription check against the tracked channel.
//!
//! The gate never lets an API failure through: a lookup that errors or times
//! out is treated as "not subscribed", and an unavailable subscriber count
//! reads as zero.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatMemberStatus, Recipient, UserId};
use thiserror::Error;

use crate::utils::logging::log_timeout;

/// A user's standing in the channel, as reported by Telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Owner,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl MembershipStatus {
    /// Only regular members, admins and the owner get through.
    pub fn grants_access(self) -> bool {
        matches!(
            self,
            MembershipStatus::Owner | MembershipStatus::Administrator | MembershipStatus::Member
        )
    }
}

impl From<ChatMemberStatus> for MembershipStatus {
    fn from(status: ChatMemberStatus) -> Self {
        match status {
            ChatMemberStatus::Owner => MembershipStatus::Owner,
            ChatMemberStatus::Administrator => MembershipStatus::Administrator,
            ChatMemberStatus::Member => MembershipStatus::Member,
            ChatMemberStatus::Restricted => MembershipStatus::Restricted,
            ChatMemberStatus::Left => MembershipStatus::Left,
            ChatMemberStatus::Banned => MembershipStatus::Banned,
        }
    }
}

#[derive(Debug, Error)]
pub enum GateError {
    #[error("telegram api error: {0}")]
    Api(String),

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Where channel membership and metadata come from.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    async fn membership(&self, user_id: u64) -> Result<MembershipStatus, GateError>;

    async fn subscriber_count(&self) -> Result<u32, GateError>;
}

/// [`ChannelDirectory`] backed by the Bot API.
pub struct TelegramDirectory {
    bot: Bot,
    channel: Recipient,
}

impl TelegramDirectory {
    pub fn new(bot: Bot, channel_username: &str) -> Self {
        Self {
            bot,
            channel: Recipient::ChannelUsername(format!("@{channel_username}")),
        }
    }
}

#[async_trait]
impl ChannelDirectory for TelegramDirectory {
    async fn membership(&self, user_id: u64) -> Result<MembershipStatus, GateError> {
        let member = self
            .bot
            .get_chat_member(self.channel.clone(), UserId(user_id))
            .await
            .map_err(|e| GateError::Api(e.to_string()))?;

        Ok(member.status().into())
    }

    async fn subscriber_count(&self) -> Result<u32, GateError> {
        self.bot
            .get_chat_member_count(self.channel.clone())
            .await
            .map_err(|e| GateError::Api(e.to_string()))
    }
}

/// Decides whether a user may use gated features.
///
/// Nothing is cached; every call asks the directory again, so a user who
/// leaves the channel loses access on the next check.
#[derive(Clone)]
pub struct SubscriptionGate {
    directory: Arc<dyn ChannelDirectory>,
    timeout: Duration,
}

impl SubscriptionGate {
    pub fn new(directory: Arc<dyn ChannelDirectory>, timeout: Duration) -> Self {
        Self { directory, timeout }
    }

    /// Raw lookup with the timeout applied.
    pub async fn check(&self, user_id: u64) -> Result<MembershipStatus, GateError> {
        match tokio::time::timeout(self.timeout, self.directory.membership(user_id)).await {
            Ok(result) => result,
            Err(_) => Err(GateError::Timeout(self.timeout)),
        }
    }

    /// `true` only for confirmed members. Failures deny access.
    pub async fn is_subscribed(&self, user_id: u64) -> bool {
        match self.check(user_id).await {
            Ok(status) => {
                tracing::debug!("Membership of {} is {:?}", user_id, status);
                status.grants_access()
            }
            Err(GateError::Timeout(after)) => {
                log_timeout("get_chat_member", after.as_secs(), Some(&format!("user {user_id}")));
                false
            }
            Err(e) => {
                tracing::warn!("Subscription check failed for {}: {}", user_id, e);
                false
            }
        }
    }

    /// Channel subscriber count, or 0 when it cannot be fetched.
    pub async fn subscriber_count(&self) -> u32 {
        let lookup = tokio::time::timeout(self.timeout, self.directory.subscriber_count()).await;
        match lookup {
            Ok(Ok(count)) => count,
            Ok(Err(e)) => {
                tracing::warn!("Failed to fetch channel subscriber count: {}", e);
                0
            }
            Err(_) => {
                log_timeout("get_chat_member_count", self.timeout.as_secs(), None);
                0
            }
        }
    }
}
