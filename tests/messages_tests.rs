#![allow(clippy::unwrap_used)]

use channel_gate_bot::bot::messages;
use channel_gate_bot::config::Config;
use channel_gate_bot::database::models::Post;
use std::time::Duration;
use url::Url;

fn test_config() -> Config {
    Config {
        telegram_bot_token: "token".to_string(),
        channel_username: "muminov_vlog".to_string(),
        bot_title: "Muminov Vlog | ENGLISH".to_string(),
        posts_database_url: "sqlite::memory:".to_string(),
        users_database_url: "sqlite::memory:".to_string(),
        chat_url: Some(Url::parse("https://t.me/+eovmr7GVTjY2Nzcy").unwrap()),
        contact_url: Some(Url::parse("https://t.me/Kmuminov").unwrap()),
        contact_phone: Some("+998 93 495 48 08".to_string()),
        membership_timeout: Duration::from_secs(10),
    }
}

#[test]
fn test_display_name_falls_back() {
    assert_eq!(messages::display_name("Aziz"), "Aziz");
    assert_eq!(messages::display_name(""), "Do'stim");
    assert_eq!(messages::display_name("   "), "Do'stim");
}

#[test]
fn test_welcome_greets_by_name() {
    let config = test_config();
    let text = messages::welcome(&config, "Aziz");
    assert!(text.contains("*Salom, Aziz\\!*"));
    assert!(text.contains("*Muminov Vlog \\| ENGLISH*"));

    let anonymous = messages::welcome(&config, "");
    assert!(anonymous.contains("Salom, Do'stim"));
}

#[test]
fn test_subscribe_prompt_is_escaped() {
    let text = messages::subscribe_prompt();
    assert!(text.starts_with("🔐 *Majburiy obuna*"));
    assert!(text.contains("bo'ling\\."));
}

#[test]
fn test_help_lists_contacts() {
    let text = messages::help(&test_config());
    assert!(text.contains("[@muminov\\_vlog](https://t.me/muminov_vlog)"));
    assert!(text.contains("`+998 93 495 48 08`"));
    assert!(text.contains("*Chat*"));
    assert!(text.contains("(https://t.me/Kmuminov)"));
}

#[test]
fn test_help_without_optional_contacts() {
    let mut config = test_config();
    config.chat_url = None;
    config.contact_url = None;
    config.contact_phone = None;

    let text = messages::help(&config);
    assert!(!text.contains("*Chat*"));
    assert!(!text.contains("Telefon"));
    assert!(text.contains("*Oxirgi yangiliklar*"));
}

#[test]
fn test_status_with_latest_post() {
    let config = test_config();
    // 2024-01-10T19:30:00Z is Thursday 11.01.2024 00:30 local
    let post = Post { id: 321, timestamp: 1704915000 };

    let text = messages::status(&config, 57, 1200, Some(&post));
    assert!(text.contains("Bot foydalanuvchilari: *57*"));
    assert!(text.contains("Kanal obunachilari: *1200*"));
    assert!(text.contains("• Kun: *Payshanba*"));
    assert!(text.contains("• Sana: *11\\.01\\.2024*"));
    assert!(text.contains("• Vaqt: *00:30 \\(O'zbekiston\\)*"));
    assert!(text.contains("[Ko'rish](https://t.me/muminov_vlog/321)"));
}

#[test]
fn test_status_without_posts() {
    let text = messages::status(&test_config(), 0, 0, None);
    assert!(text.contains("Hali hech qanday post yo'q\\."));
    assert!(!text.contains("Oxirgi post"));
}

#[test]
fn test_recent_posts_are_numbered_in_given_order() {
    let config = test_config();
    let posts = vec![
        Post { id: 12, timestamp: 1704915000 }, // 11.01 00:30
        Post { id: 11, timestamp: 1704913200 }, // 11.01 00:00
    ];

    let text = messages::recent_posts(&config, &posts);
    let lines: Vec<&str> = text.lines().filter(|l| l.contains("Yangilik]")).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "1\\. [Yangilik](https://t.me/muminov_vlog/12) — 11\\.01 • 00:30");
    assert_eq!(lines[1], "2\\. [Yangilik](https://t.me/muminov_vlog/11) — 11\\.01 • 00:00");
}

#[test]
fn test_no_recent_posts_text() {
    assert!(messages::no_recent_posts().starts_with("📭 Afsuski"));
}

#[test]
fn test_busy_day_list_is_capped() {
    let config = test_config();
    let posts: Vec<Post> = (0..80)
        .map(|i| Post { id: 1000 - i, timestamp: 1704915000 - i * 60 })
        .collect();

    let text = messages::recent_posts(&config, &posts);
    let lines = text.lines().filter(|l| l.contains("Yangilik]")).count();
    assert_eq!(lines, messages::RECENT_POSTS_LIMIT);
    assert!(text.contains("https://t.me/muminov_vlog/1000)"));
    assert!(!text.contains("https://t.me/muminov_vlog/950)"));
    assert!(text.contains("_\\.\\.\\. va yana 30 ta yangilik_"));
    assert!(text.chars().count() < 4096);
}

#[test]
fn test_short_list_has_no_overflow_note() {
    let posts = vec![Post { id: 1, timestamp: 1704915000 }];
    let text = messages::recent_posts(&test_config(), &posts);
    assert!(!text.contains("va yana"));
}

#[test]
fn test_try_again_later_is_escaped() {
    assert!(messages::try_again_later().ends_with("urinib ko'ring\\."));
}
