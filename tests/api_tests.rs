mod common;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::mocks::MockLLMClient;
use common::{test_server, test_server_with_config};
use nex::NexConfig;
use nex::types::{AppError, ChatMessage, ChatRole};
use rstest::rstest;
use serde_json::{Value, json};

// ============= System Endpoints =============

#[tokio::test]
async fn test_health_check() {
    let server = test_server(MockLLMClient::new("unused"));

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_api_root_greeting() {
    let server = test_server(MockLLMClient::new("unused"));

    for path in ["/api", "/api/"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        response.assert_json(&json!({"message": "Hello World"}));
    }
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = test_server(MockLLMClient::new("unused"));

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-123"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");

    let generated = server.get("/health").await.header("x-request-id");
    assert!(!generated.is_empty());
}

// ============= Chat =============

#[tokio::test]
async fn test_chat_returns_assistant_reply() {
    let server = test_server(MockLLMClient::new("Hello!"));

    let response = server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}], "model": "gpt-4o-mini"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"content": "Hello!", "role": "assistant"}));
}

#[tokio::test]
async fn test_chat_prepends_system_prompt_and_keeps_history() {
    let llm = MockLLMClient::new("Sure.");
    let server = test_server(llm.clone());

    server
        .post("/api/chat")
        .json(&json!({
            "messages": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello! How can I help?"},
                {"role": "user", "content": "Tell me a joke"}
            ]
        }))
        .await
        .assert_status_ok();

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);

    let (model, messages) = &calls[0];
    assert_eq!(model, "gpt-4o-mini");
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, ChatRole::System);
    assert!(messages[0].content.starts_with("You are Nex.Ai"));
    assert_eq!(messages[1], ChatMessage::user("Hi"));
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[3], ChatMessage::user("Tell me a joke"));
}

#[tokio::test]
async fn test_chat_uses_requested_model() {
    let llm = MockLLMClient::new("ok");
    let server = test_server(llm.clone());

    server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}], "model": "gpt-4o"}))
        .await
        .assert_status_ok();

    assert_eq!(llm.calls()[0].0, "gpt-4o");
}

#[tokio::test]
async fn test_chat_uses_configured_system_prompt() {
    let llm = MockLLMClient::new("ok");
    let mut config = NexConfig::default();
    config.llm.system_prompt = "Answer in French.".to_string();
    let server = test_server_with_config(llm.clone(), config);

    server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}]}))
        .await
        .assert_status_ok();

    assert_eq!(llm.calls()[0].1[0], ChatMessage::system("Answer in French."));
}

#[tokio::test]
async fn test_chat_rejects_unknown_role() {
    let llm = MockLLMClient::new("unused");
    let server = test_server(llm.clone());

    let response = server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "robot", "content": "Hi"}]}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["detail"].is_string());
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn test_chat_rejects_malformed_json() {
    let server = test_server(MockLLMClient::new("unused"));

    let response = server
        .post("/api/chat")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{not json"))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[rstest]
#[case::missing_key(
    || AppError::MissingApiKey("OPENAI_API_KEY".to_string()),
    StatusCode::INTERNAL_SERVER_ERROR,
    "OpenAI API key not configured. Please set OPENAI_API_KEY environment variable."
)]
#[case::upstream_status_passthrough(
    || AppError::Upstream { status: 429, message: "Rate limit reached".to_string() },
    StatusCode::TOO_MANY_REQUESTS,
    "AI service error: Rate limit reached"
)]
#[case::timeout(|| AppError::Timeout, StatusCode::GATEWAY_TIMEOUT, "Request to AI service timed out")]
#[case::connection(
    || AppError::Connection("connection refused".to_string()),
    StatusCode::BAD_GATEWAY,
    "Error connecting to AI service: connection refused"
)]
#[case::malformed_upstream(
    || AppError::LLM("missing field `choices`".to_string()),
    StatusCode::INTERNAL_SERVER_ERROR,
    "AI service error: missing field `choices`"
)]
#[tokio::test]
async fn test_chat_error_mapping(
    #[case] make_error: fn() -> AppError,
    #[case] status: StatusCode,
    #[case] detail: &str,
) {
    let server = test_server(MockLLMClient::failing(make_error));

    let response = server
        .post("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hi"}]}))
        .await;

    response.assert_status(status);
    response.assert_json(&json!({"detail": detail}));
}

// ============= CORS =============

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let server = test_server(MockLLMClient::new("unused"));

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://somewhere.test"),
        )
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_cors_reflects_listed_origin() {
    let mut config = NexConfig::default();
    config.server.cors_origins = vec!["http://app.test".to_string()];
    let server = test_server_with_config(MockLLMClient::new("unused"), config);

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://app.test"),
        )
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://app.test"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");
}
