//! HTTP ingress for the drawing Mini App
//!
//! One upload endpoint plus a liveness probe. The front-end runs on a
//! different origin (static hosting), so the router carries a permissive
//! CORS layer; there is no sensitive data behind it.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::card::{decode_data_url, parse_upload};
use crate::core::error::AppError;
use crate::telegram::sender::CardSender;

/// Liveness string returned by `GET /`.
pub const HEALTH_TEXT: &str = "Bot is alive!";

/// Shared state for all endpoints
#[derive(Clone)]
pub struct WebAppState {
    pub sender: Arc<dyn CardSender>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Single catch-all: every upload failure is logged and reported to
        // the front-end as a generic 500 with the error text.
        log::error!("Upload failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Creates the router for the Mini App ingress
pub fn create_webapp_router(sender: Arc<dyn CardSender>) -> Router {
    // CORS for the Mini App. tower-http refuses wildcard values together
    // with credentials, so "any origin" is expressed by mirroring the
    // request's origin and headers.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/upload_image", post(handle_upload))
        .route("/", get(health_check))
        .layer(cors)
        .with_state(WebAppState { sender })
}

/// Runs the web server for the Mini App ingress
pub async fn run_webapp_server(port: u16, sender: Arc<dyn CardSender>) -> anyhow::Result<()> {
    let app = create_webapp_router(sender);

    let addr = format!("0.0.0.0:{}", port);
    log::info!("🌐 Starting upload server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint used by the hosting platform's reachability probe
async fn health_check() -> &'static str {
    HEALTH_TEXT
}

/// POST /upload_image - decode the drawn card and deliver it to the chat
///
/// The body is taken raw and parsed here so that malformed JSON, a broken
/// data URL, and a failed send all travel the same `AppError` path.
async fn handle_upload(State(state): State<WebAppState>, body: String) -> Result<&'static str, AppError> {
    let request = parse_upload(&body)?;
    let recipient = request.recipient.chat_id()?;
    let image = decode_data_url(&request.image)?;

    log::info!("Delivering card ({} bytes) to chat {}", image.len(), recipient);
    state.sender.send_card(recipient, image).await?;

    Ok("OK")
}
