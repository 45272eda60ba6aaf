//! Mock implementations for testing.
//!
//! Lets the HTTP layer be exercised without a real upstream.

use async_trait::async_trait;
use nex::LLMClient;
use nex::types::{AppError, ChatMessage, Result};
use std::sync::{Arc, Mutex};

type ErrorFactory = Arc<dyn Fn() -> AppError + Send + Sync>;

/// A forwarded call: `(model, messages)`
pub type RecordedCall = (String, Vec<ChatMessage>);

/// Mock LLM client that returns a canned reply or error and records every call.
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    failure: Option<ErrorFactory>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockLLMClient {
    /// Create a mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock client that always fails with the error built by `make_error`.
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> AppError + Send + Sync + 'static,
    {
        Self {
            response: String::new(),
            failure: Some(Arc::new(make_error)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_history(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((model.to_string(), messages.to_vec()));

        match &self.failure {
            Some(make_error) => Err(make_error()),
            None => Ok(self.response.clone()),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
