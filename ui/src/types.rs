//! Message model and the wire types shared with the Nex.Ai proxy

use serde::{Deserialize, Serialize};

/// Model identifier sent with every chat request
pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// One entry of the serialized history: role and content only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
}

/// Chat request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    pub model: String,
}

/// Chat response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub content: String,
    #[serde(default)]
    pub role: Option<MessageRole>,
}

/// Error body from the proxy
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Per-conversation message identifier, assigned in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Message in a conversation
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Set on the placeholder appended when a chat request fails
    pub is_error: bool,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
            is_error: false,
        }
    }

    pub fn assistant(id: MessageId, content: impl Into<String>, is_error: bool) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now(),
            is_error,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

impl From<&Message> for ChatTurn {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

impl ChatRequest {
    /// Serialize a history, dropping ids, timestamps and error flags
    pub fn from_history(history: &[Message], model: impl Into<String>) -> Self {
        Self {
            messages: history.iter().map(ChatTurn::from).collect(),
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_keeps_only_role_and_content() {
        let history = vec![
            Message::user(MessageId(1), "Hi"),
            Message::assistant(MessageId(2), "Hello!", false),
        ];
        let request = ChatRequest::from_history(&history, CHAT_MODEL);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "messages": [
                    {"role": "user", "content": "Hi"},
                    {"role": "assistant", "content": "Hello!"}
                ],
                "model": "gpt-4o-mini"
            })
        );
    }

    #[test]
    fn response_role_is_optional() {
        let resp: ChatResponse = serde_json::from_str(r#"{"content":"Hello!"}"#).unwrap();
        assert_eq!(resp.content, "Hello!");
        assert!(resp.role.is_none());
    }
}
