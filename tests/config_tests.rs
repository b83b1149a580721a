#![allow(clippy::unwrap_used)]

use channel_gate_bot::config::Config;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "CHANNEL_USERNAME",
    "BOT_TITLE",
    "POSTS_DATABASE_URL",
    "USERS_DATABASE_URL",
    "CHAT_URL",
    "CONTACT_URL",
    "CONTACT_PHONE",
    "MEMBERSHIP_TIMEOUT_SECS",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

fn lock() -> std::sync::MutexGuard<'static, ()> {
    CONFIG_TEST_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("CHANNEL_USERNAME", "@muminov_vlog");
    env::set_var("BOT_TITLE", "Muminov Vlog | ENGLISH");
    env::set_var("POSTS_DATABASE_URL", "sqlite:posts_test.db");
    env::set_var("USERS_DATABASE_URL", "sqlite:users_test.db");
    env::set_var("CHAT_URL", "https://t.me/+invite");
    env::set_var("CONTACT_URL", "https://t.me/owner");
    env::set_var("CONTACT_PHONE", "+998 93 495 48 08");
    env::set_var("MEMBERSHIP_TIMEOUT_SECS", "3");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.channel_username, "muminov_vlog");
    assert_eq!(config.bot_title, "Muminov Vlog | ENGLISH");
    assert_eq!(config.posts_database_url, "sqlite:posts_test.db");
    assert_eq!(config.users_database_url, "sqlite:users_test.db");
    assert_eq!(config.chat_url.as_ref().map(|u| u.as_str()), Some("https://t.me/+invite"));
    assert_eq!(config.contact_url.as_ref().map(|u| u.as_str()), Some("https://t.me/owner"));
    assert_eq!(config.contact_phone.as_deref(), Some("+998 93 495 48 08"));
    assert_eq!(config.membership_timeout, Duration::from_secs(3));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("CHANNEL_USERNAME", "some_channel");

    let config = Config::from_env().unwrap();

    assert_eq!(config.posts_database_url, "sqlite:./data/posts.db");
    assert_eq!(config.users_database_url, "sqlite:./data/users.db");
    assert_eq!(config.membership_timeout, Duration::from_secs(10));
    assert_eq!(config.bot_title, "Channel Companion");
    assert!(config.chat_url.is_none());
    assert!(config.contact_url.is_none());
    assert!(config.contact_phone.is_none());

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = lock();
    clear_env();

    env::set_var("CHANNEL_USERNAME", "some_channel");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("TELEGRAM_BOT_TOKEN must be set"));

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_missing_channel() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let result = Config::from_env();
    assert!(result.unwrap_err().to_string().contains("CHANNEL_USERNAME must be set"));

    env::set_var("CHANNEL_USERNAME", "@");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_timeout() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("CHANNEL_USERNAME", "some_channel");

    for bad in ["abc", "-1", "0"] {
        env::set_var("MEMBERSHIP_TIMEOUT_SECS", bad);
        let result = Config::from_env();
        assert!(result.is_err(), "timeout '{bad}' should be rejected");
        assert!(result.unwrap_err().to_string().contains("Invalid MEMBERSHIP_TIMEOUT_SECS"));
    }

    env::set_var("MEMBERSHIP_TIMEOUT_SECS", "  15  ");
    assert_eq!(Config::from_env().unwrap().membership_timeout, Duration::from_secs(15));

    clear_env();
}

#[test]
fn test_config_invalid_url() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("CHANNEL_USERNAME", "some_channel");
    env::set_var("CONTACT_URL", "not a url");

    let result = Config::from_env();
    assert!(result.unwrap_err().to_string().contains("Invalid CONTACT_URL"));

    clear_env();
}

#[test]
fn test_config_empty_database_urls_use_defaults() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("CHANNEL_USERNAME", "some_channel");
    env::set_var("POSTS_DATABASE_URL", "");
    env::set_var("USERS_DATABASE_URL", "  ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.posts_database_url, "sqlite:./data/posts.db");
    assert_eq!(config.users_database_url, "sqlite:./data/users.db");

    clear_env();
}

#[test]
fn test_channel_links_and_matching() {
    let _guard = lock();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("CHANNEL_USERNAME", "Muminov_Vlog");

    let config = Config::from_env().unwrap();
    assert_eq!(config.channel_url().unwrap().as_str(), "https://t.me/Muminov_Vlog");
    assert_eq!(config.post_url(42), "https://t.me/Muminov_Vlog/42");

    assert!(config.is_tracked_channel(Some("muminov_vlog")));
    assert!(config.is_tracked_channel(Some("MUMINOV_VLOG")));
    assert!(!config.is_tracked_channel(Some("other_channel")));
    assert!(!config.is_tracked_channel(None));

    clear_env();
}
