//! JSON mode: the response is validated and re-requested until it parses
//! as a JSON object (markdown fences are stripped automatically).

use inference_plus::{ChatCompletionsClient, ChatMessage, ChatRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ChatCompletionsClient::from_env()?;

    let request = ChatRequest::new(
        "gpt-4o-mini",
        vec![ChatMessage::user(
            "Return a JSON object with fields 'city' and 'population' for Tokyo.",
        )],
    )
    .with_json_object();

    let outcome = client.complete(request).await?;

    // Guaranteed to parse: invalid JSON would have been retried and, after
    // exhaustion, surfaced as an error instead of returned silently.
    let value: serde_json::Value = serde_json::from_str(&outcome.content)?;
    println!("✅ city: {}", value["city"]);
    println!("   population: {}", value["population"]);

    Ok(())
}
