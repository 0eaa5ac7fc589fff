//! Bot initialization and command definitions

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "показать кнопку рисовалки")]
    Start,
    #[command(description = "краткая справка")]
    Help,
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Token missing or HTTP client construction failed
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        anyhow::bail!("BOT_TOKEN environment variable is not set");
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    Ok(Bot::with_client(token, client))
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
