//! Embeddings client.

use crate::config::ClientConfig;
use crate::error::InferenceError;
use crate::executor::RequestExecutor;
use crate::retry::RetryConfig;
use crate::transport::{HttpTransport, Transport};
use crate::types::{EmbeddingsRequest, EmbeddingsResponse};

/// Embeddings client with automatic retry for transient failures.
pub struct EmbeddingsClient<T: Transport = HttpTransport> {
    transport: T,
    retry: RetryConfig,
}

impl EmbeddingsClient<HttpTransport> {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, InferenceError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            retry: config.retry,
        })
    }

    /// Create a client from `INFERENCE_ENDPOINT` and `INFERENCE_API_KEY`.
    pub fn from_env() -> Result<Self, InferenceError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> EmbeddingsClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T, retry: RetryConfig) -> Self {
        Self { transport, retry }
    }

    /// Generate embeddings. A `retry` set on the request overrides the
    /// client's configuration for this call only.
    pub async fn embed(
        &self,
        request: EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, InferenceError> {
        let retry = request.retry.as_ref().unwrap_or(&self.retry);
        RequestExecutor::new(&self.transport, retry)
            .execute_embeddings(&request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{embeddings_response, MockTransport};

    #[tokio::test]
    async fn test_embed_returns_vectors() {
        let transport = MockTransport::new();
        transport.push_embeddings(Ok(embeddings_response()));

        let client = EmbeddingsClient::with_transport(transport, RetryConfig::default());
        let response = client
            .embed(EmbeddingsRequest::new("embed-model", vec!["hi".to_string()]))
            .await
            .unwrap();

        assert_eq!(response.data[0].embedding.len(), 3);
    }
}
