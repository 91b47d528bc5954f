//! Default `reqwest`-based transport.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{InferenceError, TransportError};
use crate::types::{ChatRequest, ChatResponse, EmbeddingsRequest, EmbeddingsResponse};

use super::Transport;

/// HTTP transport speaking the OpenAI-compatible protocol.
pub struct HttpTransport {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                InferenceError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.post_json("chat/completions", request).await
    }

    async fn embeddings(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, TransportError> {
        self.post_json("embeddings", request).await
    }
}
