//! Separating a reasoning model's thinking from its final answer.

use inference_plus::{ChatCompletionsClient, ChatMessage, ChatRequest, ReasoningTags};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ChatCompletionsClient::from_env()?;

    let request = ChatRequest::new(
        "deepseek-r1",
        vec![ChatMessage::user(
            "A farmer has 17 sheep. All but 9 run away. How many are left?",
        )],
    )
    .with_reasoning_tags(ReasoningTags::think());

    let outcome = client.complete(request).await?;

    if let Some(reasoning) = &outcome.reasoning {
        println!("🧠 Reasoning:\n{}\n", reasoning);
    }
    println!("✅ Answer: {}", outcome.content);

    Ok(())
}
