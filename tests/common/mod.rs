#![allow(dead_code)]

pub mod mocks;

use axum_test::TestServer;
use mocks::MockLLMClient;
use nex::{AppState, NexConfig, build_app};
use std::sync::Arc;

/// Test server backed by `llm` with default configuration
pub fn test_server(llm: MockLLMClient) -> TestServer {
    test_server_with_config(llm, NexConfig::default())
}

pub fn test_server_with_config(llm: MockLLMClient, config: NexConfig) -> TestServer {
    let app = build_app(AppState::new(config, Arc::new(llm)));
    TestServer::new(app).expect("Failed to create test server")
}
