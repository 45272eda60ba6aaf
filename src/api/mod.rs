//! HTTP API Handlers and Routes
//!
//! # API Endpoints
//!
//! - `POST /api/chat` - Forward a message history to the upstream model
//! - `GET /api/` - Greeting
//! - `GET /health` - Health check
//!
//! Every failure is returned as `{"detail": "..."}` with a status that
//! reflects where it happened (400 bad request, 5xx upstream trouble).
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

use crate::types::{ChatMessage, ChatRequest, ChatResponse, ChatRole, ErrorBody, RootResponse};
use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Request id propagation middleware.
pub mod request_id;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document for the public endpoints
#[derive(OpenApi)]
#[openapi(
    info(title = "Nex.Ai API", description = "Chat completion proxy for the Nex.Ai web client"),
    paths(
        handlers::chat::chat,
        handlers::system::root,
        handlers::system::health,
    ),
    components(schemas(ChatRequest, ChatResponse, ChatMessage, ChatRole, ErrorBody, RootResponse)),
    tags(
        (name = "chat", description = "Chat completion"),
        (name = "system", description = "Greeting and health")
    )
)]
pub struct ApiDoc;
