//! OpenAI-compatible client tests against a mocked upstream.
//!
//! wiremock stands in for the chat completion API so the error mapping can be
//! checked end to end: upstream status and body in, `AppError` out.

use axum::http::StatusCode;
use nex::llm::{LLMClient, OpenAIClient};
use nex::types::{AppError, ChatMessage};
use nex::utils::toml_config::LlmConfig;
use nex::{AppState, NexConfig, build_app};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

fn upstream_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        api_url: format!("{}/v1/chat/completions", server.uri()),
        ..LlmConfig::default()
    }
}

fn client_for(server: &MockServer) -> OpenAIClient {
    OpenAIClient::new(&upstream_config(server), Some("sk-test".to_string()))
        .expect("Failed to build client")
}

/// Create a mock chat completion response
fn mock_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn history() -> Vec<ChatMessage> {
    vec![ChatMessage::system("be nice"), ChatMessage::user("Hi")]
}

// ============= Success Path =============

#[tokio::test]
async fn test_completion_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 1024,
            "temperature": 0.7,
            "messages": [
                {"role": "system", "content": "be nice"},
                {"role": "user", "content": "Hi"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("Hello!")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .expect("completion should succeed");

    assert_eq!(reply, "Hello!");
}

// ============= Error Mapping =============

#[tokio::test]
async fn test_upstream_error_message_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    match &err {
        AppError::Upstream { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("Expected Upstream, got {:?}", other),
    }
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upstream_plain_text_error_uses_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "AI service error: upstream overloaded");
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::LLM(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().starts_with("AI service error: "));
}

#[tokio::test]
async fn test_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::LLM(_)));
}

#[tokio::test]
async fn test_upstream_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_completion("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = LlmConfig {
        timeout_secs: 1,
        ..upstream_config(&server)
    };
    let client = OpenAIClient::new(&config, Some("sk-test".to_string())).unwrap();

    let err = client
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Timeout), "got {:?}", err);
    assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("Failed to reserve port")
        .port();

    let config = LlmConfig {
        api_url: format!("http://127.0.0.1:{}/v1/chat/completions", port),
        ..LlmConfig::default()
    };
    let client = OpenAIClient::new(&config, Some("sk-test".to_string())).unwrap();
    let err = client
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Connection(_)), "got {:?}", err);
    assert!(err
        .to_string()
        .starts_with("Error connecting to AI service: "));
}

#[tokio::test]
async fn test_missing_api_key_never_calls_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAIClient::new(&upstream_config(&server), None).unwrap();
    let err = client
        .generate_with_history("gpt-4o-mini", &history())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "OpenAI API key not configured. Please set OPENAI_API_KEY environment variable."
    );
}

// ============= Through the HTTP layer =============

#[tokio::test]
async fn test_chat_endpoint_against_mock_upstream() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("Hello!")))
        .mount(&upstream)
        .await;

    let config = NexConfig {
        llm: upstream_config(&upstream),
        ..NexConfig::default()
    };
    let app = build_app(AppState::new(config, Arc::new(client_for(&upstream))));
    let server = axum_test::TestServer::new(app).expect("Failed to create test server");

    let response = server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}]}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"content": "Hello!", "role": "assistant"}));
}

#[tokio::test]
async fn test_chat_endpoint_passes_upstream_status() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached"}
        })))
        .mount(&upstream)
        .await;

    let app = build_app(AppState::new(
        NexConfig::default(),
        Arc::new(client_for(&upstream)),
    ));
    let server = axum_test::TestServer::new(app).expect("Failed to create test server");

    let response = server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}]}))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    response.assert_json(&json!({"detail": "AI service error: Rate limit reached"}));
}
