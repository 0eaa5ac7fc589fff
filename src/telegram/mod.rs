//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod sender;
pub mod webapp;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use sender::{CardSender, CARD_CAPTION, CARD_FILE_NAME};
pub use webapp::{create_webapp_router, run_webapp_server};
