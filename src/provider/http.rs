//! Shared HTTP client, header, and timeout utilities.

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::VoicesError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Deadlines are enforced per request via [`with_timeout`], not on the
/// client itself.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build ElevenLabs-style headers (xi-api-key).
pub fn xi_api_key_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(val) = HeaderValue::from_str(api_key) {
        headers.insert("xi-api-key", val);
    }
    headers
}

/// Strip a trailing slash so path joins never double the separator.
pub fn trim_trailing_slash(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Wrap a future with a deadline, mapping elapsed time to [`VoicesError::Timeout`].
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, VoicesError>>,
) -> Result<T, VoicesError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(VoicesError::Timeout(duration.as_millis() as u64)),
    }
}
