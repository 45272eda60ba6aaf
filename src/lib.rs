//! # Nex.Ai server
//!
//! Backend for the Nex.Ai guest chat client. It exposes a single chat
//! endpoint that prepends the assistant's system prompt to the conversation
//! and forwards it to an OpenAI-compatible chat completion API.
//!
//! The browser client lives in the separate `ui/` crate (Leptos, compiled to
//! WebAssembly). With the `ui` feature the compiled client is embedded and
//! served from this binary.
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use nex::{AppState, NexConfig, build_app, llm::OpenAIClient};
//! use std::sync::Arc;
//!
//! let config = NexConfig::load("nex.toml")?;
//! let llm = OpenAIClient::new(&config.llm, config.llm.api_key())?;
//! let app = build_app(AppState::new(config, Arc::new(llm)));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ui` | Serve the compiled web client from `ui/dist` |
//! | `swagger-ui` | Interactive API docs at `/swagger-ui/` |

#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command line interface.
pub mod cli;
/// LLM provider clients.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Embedded web client.
#[cfg(feature = "ui")]
pub mod ui;
/// Configuration and tracing setup.
pub mod utils;

pub use llm::LLMClient;
pub use types::{AppError, Result};
pub use utils::toml_config::NexConfig;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<NexConfig>,
    /// Upstream chat completion client
    pub llm: Arc<dyn LLMClient>,
}

impl AppState {
    pub fn new(config: NexConfig, llm: Arc<dyn LLMClient>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }
}

/// CORS policy from `server.cors_origins`
pub fn cors_layer(config: &NexConfig) -> CorsLayer {
    if config.server.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Assemble the full application router
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let app = Router::new()
        .route("/health", get(api::handlers::system::health))
        .route("/api", get(api::handlers::system::root))
        .route("/api/", get(api::handlers::system::root))
        .nest("/api", api::routes::create_router());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    #[cfg(feature = "ui")]
    let app = app.fallback(ui::serve_ui);

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(api::request_id::request_id_middleware))
        .with_state(state)
}
