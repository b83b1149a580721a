use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_POSTS_DATABASE_URL: &str = "sqlite:./data/posts.db";
const DEFAULT_USERS_DATABASE_URL: &str = "sqlite:./data/users.db";
const DEFAULT_MEMBERSHIP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BOT_TITLE: &str = "Channel Companion";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Channel username without the leading `@`.
    pub channel_username: String,
    /// Name shown in the welcome and help texts.
    pub bot_title: String,
    pub posts_database_url: String,
    pub users_database_url: String,
    pub chat_url: Option<Url>,
    pub contact_url: Option<Url>,
    pub contact_phone: Option<String>,
    pub membership_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let channel = env::var("CHANNEL_USERNAME")
            .map_err(|_| anyhow!("CHANNEL_USERNAME must be set"))?;
        let channel_username = channel.trim().trim_start_matches('@').to_string();
        if channel_username.is_empty() {
            return Err(anyhow!("CHANNEL_USERNAME must be set"));
        }

        let posts_database_url = database_url_or_default("POSTS_DATABASE_URL", DEFAULT_POSTS_DATABASE_URL);
        let users_database_url = database_url_or_default("USERS_DATABASE_URL", DEFAULT_USERS_DATABASE_URL);

        let timeout_str = env::var("MEMBERSHIP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_MEMBERSHIP_TIMEOUT_SECS.to_string());
        let timeout_secs: u64 = timeout_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid MEMBERSHIP_TIMEOUT_SECS"))?;
        if timeout_secs == 0 {
            return Err(anyhow!("Invalid MEMBERSHIP_TIMEOUT_SECS"));
        }

        Ok(Config {
            telegram_bot_token: token,
            channel_username,
            bot_title: optional_value("BOT_TITLE").unwrap_or_else(|| DEFAULT_BOT_TITLE.to_string()),
            posts_database_url,
            users_database_url,
            chat_url: optional_url("CHAT_URL")?,
            contact_url: optional_url("CONTACT_URL")?,
            contact_phone: optional_value("CONTACT_PHONE"),
            membership_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Public link to the tracked channel.
    pub fn channel_url(&self) -> Result<Url> {
        Url::parse(&format!("https://t.me/{}", self.channel_username))
            .map_err(|e| anyhow!("Invalid channel username '{}': {}", self.channel_username, e))
    }

    /// Public link to a single post in the tracked channel.
    pub fn post_url(&self, post_id: i64) -> String {
        format!("https://t.me/{}/{}", self.channel_username, post_id)
    }

    /// Whether a channel post came from the tracked channel.
    pub fn is_tracked_channel(&self, username: Option<&str>) -> bool {
        username.is_some_and(|name| name.eq_ignore_ascii_case(&self.channel_username))
    }
}

fn database_url_or_default(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => default.to_string(),
    }
}

fn optional_value(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_url(var: &str) -> Result<Option<Url>> {
    optional_value(var)
        .map(|raw| Url::parse(&raw).map_err(|_| anyhow!("Invalid {}", var)))
        .transpose()
}
