use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::bot::keyboards::{self, CallbackAction};
use crate::bot::messages;
use crate::database::models::Post;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_database_error,
};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    ctx: BotContext,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    log_command_start(&format!("callback:{data}"), username, user_id);

    match CallbackAction::parse(&data) {
        Some(CallbackAction::CheckSubscription) => handle_check_subscription(bot, q, &ctx).await,
        Some(CallbackAction::LastPosts) => handle_last_posts(bot, q, &ctx).await,
        None => {
            tracing::warn!("Unknown callback data '{}' from {}", data, user_id);
            bot.answer_callback_query(q.id)
                .text(messages::ALERT_UNKNOWN_ACTION)
                .await?;
            Ok(())
        }
    }
}

async fn handle_check_subscription(
    bot: Bot,
    q: CallbackQuery,
    ctx: &BotContext,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;

    if !ctx.gate.is_subscribed(user_id).await {
        bot.answer_callback_query(q.id)
            .text(messages::ALERT_NOT_SUBSCRIBED)
            .show_alert(true)
            .await?;
        log_command_success("check_sub", user_id, "still not subscribed");
        return Ok(());
    }

    bot.answer_callback_query(q.id)
        .text(messages::ALERT_VERIFIED)
        .show_alert(true)
        .await?;

    if let Some(message) = q.message {
        bot.edit_message_text(message.chat.id, message.id, messages::verified_greeting(&q.from.first_name))
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(keyboards::main_keyboard(&ctx.config))
            .await?;
    }
    log_command_success("check_sub", user_id, "verified");
    Ok(())
}

async fn handle_last_posts(
    bot: Bot,
    q: CallbackQuery,
    ctx: &BotContext,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;

    if !ctx.gate.is_subscribed(user_id).await {
        bot.answer_callback_query(q.id)
            .text(messages::ALERT_SUBSCRIBE_FIRST)
            .show_alert(true)
            .await?;
        log_command_success("last_posts", user_id, "subscription required");
        return Ok(());
    }

    let Some(chat_id) = q.message.as_ref().map(|m| m.chat.id) else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let posts = match Post::recent(&ctx.stores.posts.pool, chrono::Utc::now()).await {
        Ok(posts) => posts,
        Err(e) => {
            log_database_error("SELECT", "posts", &e.to_string());
            log_command_error("last_posts", user_id, "could not load recent posts");
            bot.answer_callback_query(q.id)
                .text("❌ Yangiliklarni yuklab bo'lmadi")
                .await?;
            return Ok(());
        }
    };

    if posts.is_empty() {
        bot.send_message(chat_id, messages::no_recent_posts())
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
    } else {
        bot.send_message(chat_id, messages::recent_posts(&ctx.config, &posts))
            .parse_mode(ParseMode::MarkdownV2)
            .disable_web_page_preview(true)
            .await?;
    }
    bot.answer_callback_query(q.id).await?;

    log_command_success(
        "last_posts",
        user_id,
        &format!("{} posts listed", posts.len()),
    );
    Ok(())
}
