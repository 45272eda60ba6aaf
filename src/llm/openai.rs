use crate::llm::client::LLMClient;
use crate::types::{AppError, ChatMessage, Result};
use crate::utils::toml_config::LlmConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for any OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAIClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamError {
    error: UpstreamErrorDetail,
}

#[derive(Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

impl OpenAIClient {
    /// Build a client from config; `api_key` is `None` when the key env var is unset
    pub fn new(config: &LlmConfig, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Whether an API key was resolved at startup
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Prefer the upstream's `error.message`, falling back to the raw body
fn upstream_error_detail(body: &str) -> String {
    serde_json::from_str::<UpstreamError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout
    } else if err.is_connect() || err.is_request() {
        AppError::Connection(err.to_string())
    } else {
        AppError::LLM(err.to_string())
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate_with_history(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingApiKey(self.api_key_env.clone()))?;

        tracing::info!(model = %model, messages = messages.len(), "Sending chat request");

        let request = CompletionRequest {
            model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Upstream responded");

        let body = response.text().await.map_err(map_transport_error)?;

        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), body = %body, "Upstream error response");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: upstream_error_detail(&body),
            });
        }

        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| AppError::LLM(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::LLM("No response from AI service".to_string()))?;

        tracing::info!("Chat completion successful");
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
