//! ElevenLabs voices-listing client.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, VoicesError};
use crate::provider::http::{shared_client, trim_trailing_slash, with_timeout, xi_api_key_headers};

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const VOICES_PATH: &str = "/v2/voices";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the ElevenLabs voices-listing endpoint.
#[derive(Debug, Clone)]
pub struct VoicesClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl VoicesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the provider's voice catalog.
    ///
    /// The payload is opaque: whatever JSON the endpoint returns is
    /// handed back unmodified. A non-200 status becomes
    /// [`VoicesError::Api`] carrying the raw response body.
    pub async fn fetch_voices(&self) -> Result<serde_json::Value> {
        let url = format!("{}{}", trim_trailing_slash(&self.base_url), VOICES_PATH);
        let headers = xi_api_key_headers(&self.api_key);

        with_timeout(self.timeout, async move {
            debug!(url = %url, "requesting voice catalog");
            let response = shared_client().get(url).headers(headers).send().await?;
            parse_voices_response(response).await
        })
        .await
    }
}

async fn parse_voices_response(response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        return Err(VoicesError::Api {
            status,
            message: body,
        });
    }

    debug!(status, "voice catalog received");
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
