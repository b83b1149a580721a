use teloxide::prelude::*;

use crate::bot::context::BotContext;
use crate::database::models::Post;
use crate::utils::logging::log_database_error;

/// Mirrors posts from the tracked channel into the posts store.
///
/// Posts from any other channel the bot happens to be in are ignored.
pub async fn channel_post_handler(msg: Message, ctx: BotContext) -> ResponseResult<()> {
    if !ctx.config.is_tracked_channel(msg.chat.username()) {
        tracing::debug!("Ignoring post {} from untracked chat {}", msg.id.0, msg.chat.id);
        return Ok(());
    }

    let post_id = i64::from(msg.id.0);
    let timestamp = msg.date.timestamp();

    match Post::save(&ctx.stores.posts.pool, post_id, timestamp).await {
        Ok(true) => tracing::info!("New channel post saved: id={} at {}", post_id, msg.date),
        Ok(false) => tracing::debug!("Channel post {} already stored", post_id),
        Err(e) => log_database_error("INSERT", "posts", &e.to_string()),
    }

    Ok(())
}
