use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::bot::messages;
use crate::database::models::{Post, User};
use crate::utils::logging::{log_command_error, log_command_success, log_database_error};
use crate::utils::markdown::escape_markdown;

/// Statistics are open to everyone, subscribed or not.
pub async fn handle_status(bot: Bot, msg: Message, ctx: &BotContext) -> ResponseResult<()> {
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);

    let user_count = match User::count(&ctx.stores.users.pool).await {
        Ok(count) => count,
        Err(e) => {
            log_database_error("COUNT", "users", &e.to_string());
            return send_status_error(&bot, &msg, user_id).await;
        }
    };

    let latest = match Post::latest(&ctx.stores.posts.pool).await {
        Ok(post) => post,
        Err(e) => {
            log_database_error("SELECT", "posts", &e.to_string());
            return send_status_error(&bot, &msg, user_id).await;
        }
    };

    let subscribers = ctx.gate.subscriber_count().await;

    let text = messages::status(&ctx.config, user_count, subscribers, latest.as_ref());
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .disable_web_page_preview(true)
        .await?;

    log_command_success(
        "/status",
        user_id,
        &format!("users={user_count} subscribers={subscribers} latest={:?}", latest.map(|p| p.id)),
    );
    Ok(())
}

async fn send_status_error(bot: &Bot, msg: &Message, user_id: u64) -> ResponseResult<()> {
    log_command_error("/status", user_id, "statistics unavailable");
    bot.send_message(
        msg.chat.id,
        escape_markdown("❌ Statistikani yuklab bo'lmadi. Keyinroq urinib ko'ring."),
    )
    .parse_mode(ParseMode::MarkdownV2)
    .await?;
    Ok(())
}
