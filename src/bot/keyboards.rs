use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

use crate::config::Config;

/// Callback data of the "check my subscription" button.
pub const CHECK_SUBSCRIPTION: &str = "check_sub";
/// Callback data of the "today's posts" button.
pub const LAST_POSTS: &str = "last_posts";

/// Button actions the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    CheckSubscription,
    LastPosts,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            CHECK_SUBSCRIPTION => Some(CallbackAction::CheckSubscription),
            LAST_POSTS => Some(CallbackAction::LastPosts),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallbackAction::CheckSubscription => CHECK_SUBSCRIPTION,
            CallbackAction::LastPosts => LAST_POSTS,
        }
    }
}

/// Shown to users who are not subscribed yet.
pub fn subscription_keyboard(channel_url: Option<Url>) -> InlineKeyboardMarkup {
    let mut rows = Vec::new();
    if let Some(url) = channel_url {
        rows.push(vec![InlineKeyboardButton::url("🔔 Kanalga obuna bo'lish", url)]);
    }
    rows.push(vec![InlineKeyboardButton::callback(
        "✅ Obunani tekshirish",
        CallbackAction::CheckSubscription.as_str(),
    )]);
    InlineKeyboardMarkup::new(rows)
}

/// Main menu for verified subscribers.
pub fn main_keyboard(config: &Config) -> InlineKeyboardMarkup {
    let mut rows = Vec::new();
    if let Ok(url) = config.channel_url() {
        rows.push(vec![InlineKeyboardButton::url("🎥 Kanal — Vloglar & Darslar", url)]);
    }
    if let Some(url) = &config.chat_url {
        rows.push(vec![InlineKeyboardButton::url("💬 Chat — Guruhda suhbat", url.clone())]);
    }
    rows.push(vec![InlineKeyboardButton::callback(
        "🆕 Oxirgi yangiliklar",
        CallbackAction::LastPosts.as_str(),
    )]);
    if let Some(url) = &config.contact_url {
        rows.push(vec![InlineKeyboardButton::url("📩 Murojaat qilish", url.clone())]);
    }
    InlineKeyboardMarkup::new(rows)
}
