//! Otkrytka — Telegram bot that delivers New Year cards drawn in a web Mini App.
//!
//! The bot greets users with a button that opens an external drawing
//! front-end; the front-end posts the finished drawing back to this process,
//! which decodes it and sends it to the user's chat as a photo.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `card`: upload payload parsing and postcard image decoding
//! - `telegram`: bot setup, dispatcher handlers, outbound delivery, and the
//!   HTTP ingress for the Mini App (`telegram::webapp`)

pub mod card;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::telegram::{create_bot, schema, CardSender, HandlerDeps};
