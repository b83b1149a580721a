use teloxide::prelude::*;

use crate::bot::commands::{help, start, status, Command};
use crate::bot::context::BotContext;
use crate::utils::logging::log_command_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> ResponseResult<()> {
    if let Some(user) = msg.from() {
        let username = user.username.as_deref().unwrap_or("unknown");
        log_command_start(&format!("{cmd:?}"), username, user.id.0);
    }

    match cmd {
        Command::Start => start::handle_start(bot, msg, &ctx).await?,
        Command::Help => help::handle_help(bot, msg, &ctx).await?,
        Command::Status => status::handle_status(bot, msg, &ctx).await?,
    }
    Ok(())
}
