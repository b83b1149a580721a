pub mod callback;
pub mod channel_post;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::bot::context::BotContext;

type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct BotHandler {
    pub ctx: BotContext,
}

impl BotHandler {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx_command = self.ctx.clone();
        let ctx_callback = self.ctx.clone();
        let ctx_channel = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let ctx = ctx_command.clone();
                        async move {
                            message::command_handler(bot, msg, cmd, ctx)
                                .await
                                .map_err(HandlerError::from)
                        }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let ctx = ctx_callback.clone();
                async move {
                    callback::callback_handler(bot, q, ctx)
                        .await
                        .map_err(HandlerError::from)
                }
            }))
            .branch(Update::filter_channel_post().endpoint(move |msg: Message| {
                let ctx = ctx_channel.clone();
                async move {
                    channel_post::channel_post_handler(msg, ctx)
                        .await
                        .map_err(HandlerError::from)
                }
            }))
    }
}
