use async_trait::async_trait;

mod client;
mod error;
pub mod live;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{GroundedAnswer, GroundingSource, WebSource};

/// The only seam between the app and the hosted generative model.
///
/// Everything the features do goes through one of these four calls; the
/// live audio session is a separate WebSocket channel (see [`live`]).
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Free-text generation from a single prompt.
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError>;

    /// Structured generation: the response is constrained to `schema` and
    /// returned as the raw JSON text the model produced.
    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String, GeminiError>;

    /// Generation with the web-search tool enabled; returns the answer text
    /// plus whatever grounding sources the gateway attached.
    async fn grounded_generate(
        &self,
        model: &str,
        query: &str,
    ) -> Result<GroundedAnswer, GeminiError>;

    /// One-shot chat: a session with `system_instruction`, one user message,
    /// one text reply.
    async fn chat(
        &self,
        model: &str,
        system_instruction: &str,
        message: &str,
    ) -> Result<String, GeminiError>;
}
