use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::bot::{keyboards, messages};
use crate::utils::logging::log_command_success;

pub async fn handle_help(bot: Bot, msg: Message, ctx: &BotContext) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0;

    if !ctx.gate.is_subscribed(user_id).await {
        bot.send_message(msg.chat.id, messages::short_subscribe_prompt())
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(keyboards::subscription_keyboard(ctx.config.channel_url().ok()))
            .await?;
        log_command_success("/help", user_id, "subscription required");
        return Ok(());
    }

    bot.send_message(msg.chat.id, messages::help(&ctx.config))
        .parse_mode(ParseMode::MarkdownV2)
        .disable_web_page_preview(true)
        .await?;
    log_command_success("/help", user_id, "help sent");

    Ok(())
}
