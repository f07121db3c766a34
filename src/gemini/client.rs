use async_trait::async_trait;
use tracing::debug;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Tool,
};
use super::{GeminiError, GenerativeClient, GroundedAnswer};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// reqwest-backed client for the generative-AI gateway.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn generate(
        &self,
        model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let body = resp.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        debug!(model, candidates = parsed.candidates.len(), "generateContent ok");
        Ok(parsed)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let req = GenerateContentRequest::from_prompt(prompt);
        let resp = self.generate(model, &req).await?;
        resp.text().ok_or(GeminiError::EmptyResponse)
    }

    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<String, GeminiError> {
        let mut req = GenerateContentRequest::from_prompt(prompt);
        req.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".into()),
            response_schema: Some(schema),
        });
        let resp = self.generate(model, &req).await?;
        resp.text().ok_or(GeminiError::EmptyResponse)
    }

    async fn grounded_generate(
        &self,
        model: &str,
        query: &str,
    ) -> Result<GroundedAnswer, GeminiError> {
        let mut req = GenerateContentRequest::from_prompt(query);
        req.tools = Some(vec![Tool::google_search()]);
        let resp = self.generate(model, &req).await?;
        Ok(GroundedAnswer {
            text: resp.text().unwrap_or_default(),
            sources: resp.grounding_sources(),
        })
    }

    async fn chat(
        &self,
        model: &str,
        system_instruction: &str,
        message: &str,
    ) -> Result<String, GeminiError> {
        let mut req = GenerateContentRequest::from_prompt(message);
        req.system_instruction = Some(Content::system_text(system_instruction));
        let resp = self.generate(model, &req).await?;
        resp.text().ok_or(GeminiError::EmptyResponse)
    }
}
