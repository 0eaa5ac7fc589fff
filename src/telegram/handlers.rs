//! Telegram bot handler tree configuration
//!
//! The handlers are organized in a testable way: `schema` returns the same
//! handler tree in production and in integration tests, and the keyboard
//! builder is a pure function.

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message, WebAppInfo};
use teloxide::utils::command::BotCommands;
use url::Url;

use crate::telegram::bot::Command;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// Constructed once at process start and cloned into each handler closure;
/// nothing here is mutable, so no locking is involved.
#[derive(Clone)]
pub struct HandlerDeps {
    /// Resolved address of the drawing front-end.
    pub webapp_url: Url,
}

/// Greeting sent in reply to /start.
pub const GREETING: &str = "Привет! Это проект «Джингл белс дизайнеры».\n\
                            Нажми кнопку, нарисуй шедевр, и я пришлю его тебе файлом.";

/// Label of the button that opens the drawing front-end.
pub const DRAW_BUTTON_LABEL: &str = "Нарисовать открытку 🎨";

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (front-end address)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(command_handler(deps))
}

/// Handler for bot commands (/start, /help)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        handle_start_command(&bot, &msg, &deps).await?;
                    }
                    Command::Help => {
                        bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handle /start command: greeting plus the one-button drawing keyboard.
async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, GREETING)
        .reply_markup(start_keyboard(deps.webapp_url.clone()))
        .await?;
    Ok(())
}

/// Builds the /start keyboard: a single button that opens the drawing
/// front-end as a Telegram Mini App.
pub fn start_keyboard(webapp_url: Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::web_app(
        DRAW_BUTTON_LABEL,
        WebAppInfo { url: webapp_url },
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_start_keyboard_has_exactly_one_webapp_button() {
        let url = Url::parse("https://cards.example.com").unwrap();
        let keyboard = start_keyboard(url);

        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);

        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, DRAW_BUTTON_LABEL);
        match &button.kind {
            InlineKeyboardButtonKind::WebApp(info) => {
                assert_eq!(info.url.as_str(), "https://cards.example.com/");
            }
            other => panic!("expected web_app button, got {:?}", other),
        }
    }

    #[test]
    fn test_keyboard_targets_configured_address() {
        let url = Url::parse("https://my-app.vercel.app/draw").unwrap();
        let keyboard = start_keyboard(url.clone());

        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::WebApp(info) => assert_eq!(info.url, url),
            other => panic!("expected web_app button, got {:?}", other),
        }
    }
}
