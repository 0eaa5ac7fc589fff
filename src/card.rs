//! Upload payload parsing and postcard image decoding
//!
//! The drawing front-end posts the finished card as a canvas data URL
//! (`data:<mime>;base64,<payload>`) together with the chat that should
//! receive it. Everything here is transient; a request's bytes live only
//! until the outbound send completes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use teloxide::types::ChatId;

use crate::core::error::{AppError, AppResult};

/// JSON body accepted by `POST /upload_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    /// Data-URL string produced by the drawing canvas.
    pub image: String,
    /// Destination chat. `Telegram.WebApp` reports the id as a number, but
    /// some front-end builds stringify it, so both forms are accepted.
    #[serde(rename = "user_id")]
    pub recipient: RecipientId,
}

/// Opaque recipient identifier as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipientId {
    Id(i64),
    Raw(String),
}

impl RecipientId {
    /// Converts the wire value into a Telegram chat id.
    ///
    /// Whether the chat actually exists (or has talked to the bot) is not
    /// checked here; an unknown id surfaces later as a transport error.
    pub fn chat_id(&self) -> AppResult<ChatId> {
        match self {
            Self::Id(id) => Ok(ChatId(*id)),
            Self::Raw(raw) => raw
                .trim()
                .parse::<i64>()
                .map(ChatId)
                .map_err(|_| AppError::Recipient(raw.clone())),
        }
    }
}

/// Parses the raw request body.
///
/// Parsing happens inside the upload handler rather than in an extractor so
/// that malformed JSON flows through the same error path as every other
/// upload failure.
pub fn parse_upload(body: &str) -> AppResult<UploadRequest> {
    Ok(serde_json::from_str(body)?)
}

/// Extracts the image bytes from a data URL.
///
/// Splits at the first comma and base64-decodes the remainder; the
/// `data:<mime>;base64` header itself is not validated.
pub fn decode_data_url(image: &str) -> AppResult<Vec<u8>> {
    let (_, payload) = image.split_once(',').ok_or(AppError::MissingSeparator)?;
    Ok(STANDARD.decode(payload)?)
}
