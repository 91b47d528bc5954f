//! Transport abstraction over the inference API wire protocol.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{ChatRequest, ChatResponse, EmbeddingsRequest, EmbeddingsResponse};

/// A collaborator that performs single inference requests.
///
/// Implementations carry no retry logic; the executor decides what to do
/// with a [`TransportError`]. Tests substitute a scripted transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one chat-completion request.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;

    /// Perform one embeddings request.
    async fn embeddings(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, TransportError>;
}
