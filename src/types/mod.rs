use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Model used when a chat request does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// ============= API Request/Response Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub content: String,
    pub role: ChatRole,
}

impl ChatResponse {
    pub fn assistant(content: String) -> Self {
        Self {
            content,
            role: ChatRole::Assistant,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("OpenAI API key not configured. Please set {0} environment variable.")]
    MissingApiKey(String),

    /// Upstream answered with a non-success status; the status is passed through.
    #[error("AI service error: {message}")]
    Upstream { status: u16, message: String },

    #[error("Request to AI service timed out")]
    Timeout,

    #[error("Error connecting to AI service: {0}")]
    Connection(String),

    #[error("AI service error: {0}")]
    LLM(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;

        match self {
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Connection(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey(_)
            | AppError::LLM(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_chat_request_model_defaults() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"user","content":"Hi"}]}"#).unwrap();

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages, vec![ChatMessage::user("Hi")]);
    }

    #[test]
    fn test_chat_request_rejects_unknown_role() {
        let result: std::result::Result<ChatRequest, _> =
            serde_json::from_str(r#"{"messages":[{"role":"robot","content":"Hi"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_response_shape() {
        let value = serde_json::to_value(ChatResponse::assistant("Hello!".into())).unwrap();
        assert_eq!(value, serde_json::json!({"content": "Hello!", "role": "assistant"}));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            AppError::MissingApiKey("OPENAI_API_KEY".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream {
                status: 429,
                message: "slow down".into()
            }
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(AppError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            AppError::Connection("refused".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InvalidInput("bad role".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::MissingApiKey("OPENAI_API_KEY".into()).to_string(),
            "OpenAI API key not configured. Please set OPENAI_API_KEY environment variable."
        );
        assert_eq!(
            AppError::Upstream {
                status: 401,
                message: "Incorrect API key provided".into()
            }
            .to_string(),
            "AI service error: Incorrect API key provided"
        );
        assert_eq!(
            AppError::Timeout.to_string(),
            "Request to AI service timed out"
        );
    }
}
