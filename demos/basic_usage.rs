//! Basic chat completion with automatic retry.

use inference_plus::{ChatCompletionsClient, ChatMessage, ChatRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Reads INFERENCE_ENDPOINT and INFERENCE_API_KEY (a .env file works too)
    let client = ChatCompletionsClient::from_env()?;

    let request = ChatRequest::new(
        "gpt-4o-mini",
        vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("Why is the sky blue? Answer in one sentence."),
        ],
    )
    .with_max_tokens(200)
    .with_temperature(0.7);

    println!("🤖 Sending chat completion request...\n");

    match client.complete(request).await {
        Ok(outcome) => {
            println!("✅ Response: {}", outcome.content);
            if let Some(usage) = outcome.raw.usage {
                println!("   Tokens used: {:?}", usage.total_tokens);
            }
        }
        Err(e) => {
            eprintln!("❌ Request failed: {}", e);
        }
    }

    Ok(())
}
