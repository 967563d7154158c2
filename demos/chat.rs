//! Minimal chat completion round trip
//!
//! Reads `OPENAI_API_KEY` (optionally from a `.env` file), sends one user
//! message, and prints the assistant's reply.
//!
//! Run with: `cargo run --example chat`

use anyhow::{Context, Result};
use chatgpt_client::{ChatCompletionRequest, ChatMessage, Client, ClientConfig};
use chatgpt_client::constants::model;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env().context("set OPENAI_API_KEY to run this demo")?;
    let client = Client::with_config(config)?;

    let mut request = ChatCompletionRequest::new(
        model::GPT_3_5_TURBO,
        vec![
            ChatMessage::system("You are a terse assistant."),
            ChatMessage::user("What is the capital of France?"),
        ],
    );
    request.temperature = Some(0.2);
    request.max_tokens = Some(64);

    let response = client.create_chat_completion(&request).await?;

    for choice in &response.choices {
        println!("{}", choice.message.content);
    }
    println!(
        "({} prompt + {} completion tokens)",
        response.usage.prompt_tokens, response.usage.completion_tokens
    );

    Ok(())
}
