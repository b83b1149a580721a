pub mod help;
pub mod start;
pub mod status;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Bot commands:")]
pub enum Command {
    #[command(description = "Start the bot and check your subscription")]
    Start,
    #[command(description = "Show what the bot can do")]
    Help,
    #[command(description = "Show bot and channel statistics")]
    Status,
}
