//! Scripted transport for exercising the retry loop in tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{
    ChatRequest, ChatResponse, Embedding, EmbeddingsRequest, EmbeddingsResponse,
};

use super::Transport;

/// Build a minimal chat response with the given content.
pub(crate) fn chat_response(content: &str) -> ChatResponse {
    serde_json::from_value(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
    .unwrap()
}

/// Build an embeddings response with one vector.
pub(crate) fn embeddings_response() -> EmbeddingsResponse {
    EmbeddingsResponse {
        data: vec![Embedding {
            index: Some(0),
            embedding: vec![0.1, 0.2, 0.3],
        }],
        model: None,
        usage: None,
    }
}

/// Transport that replays a scripted sequence of results and counts calls.
#[derive(Default)]
pub(crate) struct MockTransport {
    chat_script: Mutex<VecDeque<Result<ChatResponse, TransportError>>>,
    embeddings_script: Mutex<VecDeque<Result<EmbeddingsResponse, TransportError>>>,
    chat_calls: AtomicU32,
    embeddings_calls: AtomicU32,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_chat(&self, result: Result<ChatResponse, TransportError>) {
        self.chat_script.lock().unwrap().push_back(result);
    }

    pub fn push_embeddings(&self, result: Result<EmbeddingsResponse, TransportError>) {
        self.embeddings_script.lock().unwrap().push_back(result);
    }

    pub fn chat_calls(&self) -> u32 {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn embeddings_calls(&self) -> u32 {
        self.embeddings_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn chat(&self, _request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.chat_script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport ran out of scripted chat results")
    }

    async fn embeddings(
        &self,
        _request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, TransportError> {
        self.embeddings_calls.fetch_add(1, Ordering::SeqCst);
        self.embeddings_script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport ran out of scripted embeddings results")
    }
}
