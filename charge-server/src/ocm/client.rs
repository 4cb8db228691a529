//! Open Charge Map HTTP client.
//!
//! Provides the single proximity query the assistant needs. One attempt per
//! call, bounded timeout, no retries.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

use crate::domain::{Coordinate, SearchRadius};

use super::error::OcmError;
use super::types::ChargePoint;

/// Default base URL for the Open Charge Map POI API.
const DEFAULT_BASE_URL: &str = "https://api.openchargemap.io/v3/poi/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of results requested per search.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Configuration for the Open Charge Map client.
#[derive(Debug, Clone)]
pub struct OcmConfig {
    /// Optional API key, sent as the `X-API-Key` header when present.
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OcmConfig {
    /// Create a config with defaults (no API key).
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OcmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Open Charge Map directory service.
#[derive(Debug, Clone)]
pub struct OcmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OcmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OcmConfig) -> Result<Self, OcmError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| OcmError::Config("invalid API key format".to_string()))?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch charging stations near a coordinate.
    ///
    /// Requests the compact, non-verbose payload. A non-success status is
    /// logged and yields an empty list, not an error; transport and parse
    /// failures are returned as errors for the caller to degrade.
    pub async fn fetch_nearby(
        &self,
        origin: Coordinate,
        radius: SearchRadius,
        max_results: u32,
    ) -> Result<Vec<ChargePoint>, OcmError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", origin.latitude().to_string()),
                ("longitude", origin.longitude().to_string()),
                ("distance", radius.as_km().to_string()),
                ("maxresults", max_results.to_string()),
                ("compact", "true".to_string()),
                ("verbose", "false".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                "directory service returned non-success status"
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OcmError::Json {
            message: e.to_string(),
        })
    }
}
