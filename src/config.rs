//! Client configuration and environment loading.

use std::env;
use std::time::Duration;

use crate::endpoint::build_endpoint_url;
use crate::error::InferenceError;
use crate::retry::RetryConfig;

/// Environment variable holding the inference endpoint URL.
pub const ENDPOINT_ENV: &str = "INFERENCE_ENDPOINT";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "INFERENCE_API_KEY";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for an inference client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Normalized endpoint base URL.
    pub endpoint: String,
    /// API key sent as a bearer token.
    pub api_key: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Default retry behavior for every call made through the client.
    pub retry: RetryConfig,
}

impl ClientConfig {
    /// Create a configuration from an endpoint and API key.
    ///
    /// The endpoint is normalized (scheme and `/v1` path added when
    /// missing); see [`build_endpoint_url`].
    pub fn new(
        endpoint: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, InferenceError> {
        Ok(Self {
            endpoint: build_endpoint_url(endpoint.as_ref())?,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
        })
    }

    /// Create a configuration from `INFERENCE_ENDPOINT` and
    /// `INFERENCE_API_KEY`, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, InferenceError> {
        dotenvy::dotenv().ok();

        let endpoint = env::var(ENDPOINT_ENV).map_err(|_| {
            InferenceError::Configuration(format!(
                "endpoint must be provided or set via the {ENDPOINT_ENV} environment variable"
            ))
        })?;
        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            InferenceError::Configuration(format!(
                "API key must be provided or set via the {API_KEY_ENV} environment variable"
            ))
        })?;

        Self::new(endpoint, api_key)
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
