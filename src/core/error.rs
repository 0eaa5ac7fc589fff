use thiserror::Error;

/// Centralized error types for the application
///
/// Every failure on the upload path is converted to this enum. The HTTP
/// layer collapses all variants into one generic 500 response, but the
/// kinds stay distinguishable for tests and future differentiation.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is not the expected JSON shape
    #[error("malformed upload request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// `image` is not a data URL (no `,` between header and payload)
    #[error("image is not a data URL: missing ',' separator")]
    MissingSeparator,

    /// Payload after the comma is not valid base64
    #[error("invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// `user_id` could not be interpreted as a chat identifier
    #[error("invalid recipient id: {0:?}")]
    Recipient(String),

    /// Telegram API errors
    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
