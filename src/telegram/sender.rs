//! Outbound card delivery
//!
//! `CardSender` is the seam between the HTTP ingress and the Telegram
//! transport: the upload handler only sees the trait, so tests substitute a
//! recording fake and production wires in the real `Bot`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::core::error::AppResult;

/// Filename attached to every delivered card.
pub const CARD_FILE_NAME: &str = "new_year_card.jpg";

/// Caption attached to every delivered card.
pub const CARD_CAPTION: &str = "Готово! С Новым Годом! 🎄";

/// Capability to deliver a finished card to a chat.
#[async_trait]
pub trait CardSender: Send + Sync {
    /// Sends the decoded image to `recipient` as a photo message.
    ///
    /// The recipient must be a chat the bot is allowed to message; an
    /// unknown or blocked chat surfaces as a transport error.
    async fn send_card(&self, recipient: ChatId, image: Vec<u8>) -> AppResult<()>;
}

#[async_trait]
impl CardSender for Bot {
    async fn send_card(&self, recipient: ChatId, image: Vec<u8>) -> AppResult<()> {
        self.send_photo(recipient, InputFile::memory(image).file_name(CARD_FILE_NAME))
            .caption(CARD_CAPTION)
            .await?;
        Ok(())
    }
}
