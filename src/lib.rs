//! Async client for the OpenAI HTTP API
//!
//! This crate covers three endpoint groups: chat completions, files, and
//! fine-tuning jobs. Each call is a single stateless round trip: validate
//! input, serialize JSON, send with auth headers, and deserialize the typed
//! response or surface a typed [`Error`].
//!
//! ```no_run
//! use chatgpt_client::Client;
//!
//! # async fn run() -> Result<(), chatgpt_client::Error> {
//! let client = Client::new(std::env::var("OPENAI_API_KEY").unwrap_or_default())?;
//! let response = client.send_message("Hello!").await?;
//! println!("{}", response.choices[0].message.content);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use models::chat::{
    ChatCompletionRequest, ChatMessage, ChatResponse, ChatResponseChoice, ChatResponseUsage,
};
pub use models::files::{DeleteFileResponse, File, FileList, FilePurpose, FileStatus};
pub use models::fine_tuning::{
    FineTuningEvent, FineTuningEventList, FineTuningHyperparameters, FineTuningJob,
    FineTuningJobList, FineTuningJobStatus, FineTuningRequest,
};
