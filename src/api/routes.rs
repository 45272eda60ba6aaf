use crate::AppState;
use crate::api::handlers;
use axum::{Router, routing::post};

/// Routes nested under `/api`; the bare `/api` greeting is mounted alongside
pub fn create_router() -> Router<AppState> {
    Router::new().route("/chat", post(handlers::chat::chat))
}
