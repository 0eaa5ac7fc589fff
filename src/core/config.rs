use once_cell::sync::Lazy;
use std::env;
use url::Url;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Address of the drawing front-end opened by the /start button
/// Read from WEBAPP_URL environment variable
/// Default: google.com (placeholder until the front-end is deployed)
pub static WEBAPP_URL: Lazy<String> = Lazy::new(|| env::var("WEBAPP_URL").unwrap_or_else(|_| "google.com".to_string()));

/// HTTP listen port for the upload endpoint
/// Read from PORT environment variable (set by the hosting platform)
/// Default: 8080
pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Network configuration for the Telegram client
pub mod network {
    use std::time::Duration;

    /// Timeout for Telegram API requests (in seconds)
    pub const TIMEOUT_SECS: u64 = 60;

    /// Telegram API request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Resolves the configured front-end address into a full URL.
///
/// The hosting platform usually exposes just the host (`my-app.vercel.app`),
/// which gets an `https://` prefix; a value that already carries a scheme is
/// used as-is.
pub fn webapp_url() -> Result<Url, url::ParseError> {
    front_end_url(&WEBAPP_URL)
}

fn front_end_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.contains("://") {
        Url::parse(raw)
    } else {
        Url::parse(&format!("https://{}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https_prefix() {
        let url = front_end_url("cards.example.com").unwrap();
        assert_eq!(url.as_str(), "https://cards.example.com/");
    }

    #[test]
    fn test_full_url_used_as_is() {
        let url = front_end_url("https://cards.example.com/draw").unwrap();
        assert_eq!(url.as_str(), "https://cards.example.com/draw");
    }

    #[test]
    fn test_placeholder_default_parses() {
        // The unset-env fallback must always produce a valid button target.
        let url = front_end_url("google.com").unwrap();
        assert_eq!(url.as_str(), "https://google.com/");
    }

    #[test]
    fn test_garbage_host_is_rejected() {
        assert!(front_end_url("not a host").is_err());
    }
}
