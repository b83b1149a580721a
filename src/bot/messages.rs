//! Reply texts, rendered as MarkdownV2.
//!
//! Kept free of I/O so the exact wording can be tested.

use crate::config::Config;
use crate::database::models::Post;
use crate::utils::datetime::local_stamp;
use crate::utils::markdown::{bold, code, escape_markdown, italic, link};

/// Fallback greeting name when the user has no first name.
pub const DEFAULT_FIRST_NAME: &str = "Do'stim";

pub const ALERT_VERIFIED: &str = "✅ Muvaffaqiyatli tasdiqlandi!";
pub const ALERT_NOT_SUBSCRIBED: &str = "❌ Hali kanalga obuna bo'lmagansiz!";
pub const ALERT_SUBSCRIBE_FIRST: &str = "⚠️ Iltimos, avval kanalga obuna bo'ling!";
pub const ALERT_UNKNOWN_ACTION: &str = "Noma'lum amal";

pub fn try_again_later() -> String {
    escape_markdown("❌ Xatolik yuz berdi. Keyinroq urinib ko'ring.")
}

pub fn display_name(first_name: &str) -> &str {
    if first_name.trim().is_empty() {
        DEFAULT_FIRST_NAME
    } else {
        first_name
    }
}

pub fn subscribe_prompt() -> String {
    format!(
        "🔐 {}\n\n{}\n\n{}",
        bold("Majburiy obuna"),
        escape_markdown("Botdan to'liq foydalanish uchun quyidagi kanalga obuna bo'ling."),
        escape_markdown("📌 Obuna bo'ldingizmi? 'Obunani tekshirish' tugmasini bosing."),
    )
}

pub fn short_subscribe_prompt() -> String {
    escape_markdown("🔐 Iltimos, avval kanalga obuna bo'ling.")
}

pub fn welcome(config: &Config, first_name: &str) -> String {
    format!(
        "✨ {}\n\n{} {} {}\n\n📚 Ingliz tili darslari\n🎥 Shaxsiy vloglar\n💡 Foydali maslahatlar\n🆕 So'nggi yangiliklar\n\n{}",
        bold(&format!("Salom, {}!", display_name(first_name))),
        escape_markdown("Siz"),
        bold(&config.bot_title),
        escape_markdown("rasmiy botidasiz!"),
        italic("Quyidagi tugmalardan foydalaning:"),
    )
}

pub fn verified_greeting(first_name: &str) -> String {
    format!(
        "✨ {}\n\n{}",
        bold(&format!("Salom, {}!", display_name(first_name))),
        escape_markdown("Endi barcha funksiyalardan foydalanishingiz mumkin."),
    )
}

pub fn help(config: &Config) -> String {
    let channel_handle = format!("@{}", config.channel_username);
    let channel_link = link(&channel_handle, &format!("https://t.me/{}", config.channel_username));

    let mut text = format!(
        "📘 {}\n\n{} {} {}\n\n{}\n",
        bold(&format!("{} — Yordam", config.bot_title)),
        escape_markdown("Bu bot —"),
        channel_link,
        escape_markdown("kanalining rasmiy hamroh botidir."),
        bold("Asosiy imkoniyatlar:"),
    );
    text.push_str(&format!("• 🎥 {} {}\n", bold("Kanal"), escape_markdown("— Ingliz tili darslari, vloglar")));
    if config.chat_url.is_some() {
        text.push_str(&format!("• 💬 {} {}\n", bold("Chat"), escape_markdown("— Fikr almashish, savol berish")));
    }
    text.push_str(&format!("• 🆕 {} {}\n", bold("Oxirgi yangiliklar"), escape_markdown("— Bugungi postlar")));
    if config.contact_url.is_some() {
        text.push_str(&format!("• 📩 {} {}\n", bold("Murojaat"), escape_markdown("— Muallifga to'g'ridan-to'g'ri yozish")));
    }

    if config.contact_phone.is_some() || config.contact_url.is_some() {
        text.push('\n');
    }
    if let Some(phone) = &config.contact_phone {
        text.push_str(&format!("📞 {} {}\n", bold("Telefon:"), code(phone)));
    }
    if let Some(url) = &config.contact_url {
        text.push_str(&format!("👤 {} {}\n", bold("Telegram:"), link(url.as_str(), url.as_str())));
    }
    text
}

pub fn status(config: &Config, user_count: i64, subscriber_count: u32, latest: Option<&Post>) -> String {
    let mut text = format!("📊 {}\n\n", bold("Statistika:"));
    text.push_str(&format!(
        "🤖 {} {}\n",
        escape_markdown("Bot foydalanuvchilari:"),
        bold(&user_count.to_string())
    ));
    text.push_str(&format!(
        "📢 {} {}\n",
        escape_markdown("Kanal obunachilari:"),
        bold(&subscriber_count.to_string())
    ));

    match latest.and_then(|post| post.published_at().map(|at| (post, at))) {
        Some((post, published_at)) => {
            let stamp = local_stamp(&published_at);
            text.push_str(&format!("\n🗓️ {}\n", bold("Oxirgi post:")));
            text.push_str(&format!("• Kun: {}\n", bold(stamp.day_name)));
            text.push_str(&format!("• Sana: {}\n", bold(&stamp.date)));
            text.push_str(&format!("• Vaqt: {}\n", bold(&format!("{} (O'zbekiston)", stamp.time))));
            text.push_str(&format!("• Havola: {}", link("Ko'rish", &config.post_url(post.id))));
        }
        None => {
            text.push_str(&format!("\n📥 {}", escape_markdown("Hali hech qanday post yo'q.")));
        }
    }
    text
}

pub fn no_recent_posts() -> String {
    escape_markdown(
        "📭 Afsuski, bugun hali yangi yangiliklar yo'q.\n\nTez orada yangi vloglar va darslar bilan qaytamiz!",
    )
}

/// Most posts listed in one reply. Telegram caps a message at 4096 characters.
pub const RECENT_POSTS_LIMIT: usize = 50;

/// Numbered list of today's posts, newest first.
///
/// Only the first [`RECENT_POSTS_LIMIT`] posts are listed, followed by a count
/// of the rest.
pub fn recent_posts(config: &Config, posts: &[Post]) -> String {
    let mut text = format!("🆕 {}\n\n", bold("Bugungi yangiliklar:"));
    for (i, post) in posts.iter().take(RECENT_POSTS_LIMIT).enumerate() {
        let when = match post.published_at() {
            Some(at) => {
                let stamp = local_stamp(&at);
                format!("{} • {}", stamp.short_date, stamp.time)
            }
            None => String::from("?"),
        };
        text.push_str(&format!(
            "{}\\. {} — {}\n",
            i + 1,
            link("Yangilik", &config.post_url(post.id)),
            escape_markdown(&when),
        ));
    }
    if posts.len() > RECENT_POSTS_LIMIT {
        let rest = posts.len() - RECENT_POSTS_LIMIT;
        text.push_str(&format!("\n{}", italic(&format!("... va yana {rest} ta yangilik"))));
    }
    text
}
