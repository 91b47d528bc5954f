//! Embeddings with automatic retry.

use inference_plus::{EmbeddingsClient, EmbeddingsRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = EmbeddingsClient::from_env()?;

    let request = EmbeddingsRequest::new(
        "text-embedding-3-small",
        vec![
            "The quick brown fox".to_string(),
            "jumps over the lazy dog".to_string(),
        ],
    );

    let response = client.embed(request).await?;

    for item in &response.data {
        println!(
            "✅ embedding {:?}: {} dimensions",
            item.index,
            item.embedding.len()
        );
    }

    Ok(())
}
