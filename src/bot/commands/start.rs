use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::{BotContext, StartOutcome};
use crate::bot::{keyboards, messages};
use crate::utils::logging::{log_command_error, log_command_success, log_database_error};

pub async fn handle_start(bot: Bot, msg: Message, ctx: &BotContext) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0;

    let outcome = match ctx.admit(user).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log_database_error("INSERT", "users", &e.to_string());
            log_command_error("/start", user_id, "user registration failed");
            bot.send_message(msg.chat.id, messages::try_again_later())
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
            return Ok(());
        }
    };

    if outcome == StartOutcome::SubscriptionRequired {
        bot.send_message(msg.chat.id, messages::subscribe_prompt())
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(keyboards::subscription_keyboard(ctx.config.channel_url().ok()))
            .await?;
        log_command_success("/start", user_id, "subscription required");
        return Ok(());
    }

    bot.send_message(msg.chat.id, messages::welcome(&ctx.config, &user.first_name))
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(keyboards::main_keyboard(&ctx.config))
        .await?;
    log_command_success("/start", user_id, "welcome sent");

    Ok(())
}
