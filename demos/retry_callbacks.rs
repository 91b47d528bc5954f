//! Observing retries through callbacks.
//!
//! The library never prints anything on its own; these two hooks are the
//! only place retry activity becomes visible.

use inference_plus::{ChatCompletionsClient, ChatMessage, ChatRequest, ClientConfig, RetryConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let retry = RetryConfig::new(3)
        .on_retry(|attempt, max_retries, error, delay| {
            eprintln!(
                "⚠️  Retry {}/{} after {} (waiting {:?})",
                attempt, max_retries, error, delay
            );
        })
        .on_json_retry(|attempt, max_retries, message| {
            eprintln!("⚠️  JSON retry {}/{}: {}", attempt, max_retries, message);
        });

    let config = ClientConfig::from_env()?.with_retry(retry);
    let client = ChatCompletionsClient::new(config)?;

    let request = ChatRequest::new(
        "gpt-4o-mini",
        vec![ChatMessage::user("Say hello in three languages.")],
    );

    let outcome = client.complete(request).await?;
    println!("✅ {}", outcome.content);

    Ok(())
}
