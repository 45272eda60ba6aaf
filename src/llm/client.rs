//! LLM client abstraction
//!
//! The proxy only needs one capability from a provider: turn a full message
//! history into the assistant's next reply. Handlers depend on this trait so
//! tests can swap the HTTP client for an in-process mock.

use crate::types::{ChatMessage, Result};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate the next assistant message for `messages` using `model`
    ///
    /// `messages` is forwarded as-is, so any system prompt must already be at
    /// the front of the slice.
    async fn generate_with_history(&self, model: &str, messages: &[ChatMessage])
        -> Result<String>;

    /// Short provider identifier used in logs
    fn provider_name(&self) -> &str;
}
