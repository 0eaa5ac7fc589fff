use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use otkrytka::core::{config, init_logger};
use otkrytka::telegram::webapp::run_webapp_server;
use otkrytka::telegram::{create_bot, schema, setup_bot_commands, CardSender, HandlerDeps};

/// Main entry point for the postcard relay bot
///
/// Starts the upload server and the Telegram dispatcher on one runtime; both
/// run until the process is stopped.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    let webapp_url = config::webapp_url().map_err(|e| anyhow::anyhow!("Invalid WEBAPP_URL: {}", e))?;
    log::info!("Front-end address: {}", webapp_url);

    // Create bot instance
    let bot = create_bot()?;

    // Register /start and /help in the Telegram UI; non-fatal if it fails
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    // Start the upload server for the drawing front-end
    let port = *config::PORT;
    let sender: Arc<dyn CardSender> = Arc::new(bot.clone());
    tokio::spawn(async move {
        if let Err(e) = run_webapp_server(port, sender).await {
            log::error!("Upload server error: {}", e);
        }
    });

    // Run the dispatcher in long polling mode
    let handler = schema(HandlerDeps { webapp_url });
    log::info!("📡 Ready to receive updates!");

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
