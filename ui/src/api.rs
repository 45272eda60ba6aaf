//! API client for communicating with the Nex.Ai proxy

use crate::types::*;
use async_trait::async_trait;
use gloo_net::http::Request;

/// Shown when a failed response carries no `detail`
pub const GENERIC_FAILURE: &str = "Failed to get AI response";

/// Failure of a single chat request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; the message is the proxy's `detail`
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Backend base URL baked in at build time; empty means same origin
pub fn backend_base() -> &'static str {
    option_env!("NEX_BACKEND_URL").unwrap_or("")
}

/// Map a status and raw body to the reply or a [`ChatError`]
pub fn interpret_response(status: u16, body: &str) -> Result<ChatResponse, ChatError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ApiError>(body)
            .ok()
            .and_then(|err| err.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ChatError::Backend { status, detail });
    }

    serde_json::from_str::<ChatResponse>(body).map_err(|e| ChatError::Decode(e.to_string()))
}

/// Carries one chat request to the backend
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

/// `fetch`-based transport against `{base}/api/chat`
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    base_url: String,
}

impl HttpChatTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl Default for HttpChatTransport {
    fn default() -> Self {
        Self::new(backend_base())
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let url = self.chat_url();
        tracing::debug!(url = %url, messages = request.messages.len(), "Sending chat request");

        let req = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ChatError::Network(format!("Failed to serialize request: {}", e)))?;

        let resp = req
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}
