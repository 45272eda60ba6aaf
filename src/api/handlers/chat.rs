use crate::{
    AppState,
    types::{AppError, ChatMessage, ChatRequest, ChatResponse, ErrorBody, Result},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// Forward a conversation to the upstream model and return its reply
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Malformed request or unknown role", body = ErrorBody),
        (status = 500, description = "API key missing or upstream returned an unreadable body", body = ErrorBody),
        (status = 502, description = "Upstream unreachable", body = ErrorBody),
        (status = 504, description = "Upstream timed out", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let mut messages = Vec::with_capacity(payload.messages.len() + 1);
    messages.push(ChatMessage::system(state.config.llm.system_prompt.as_str()));
    messages.extend(payload.messages);

    let content = state
        .llm
        .generate_with_history(&payload.model, &messages)
        .await?;

    Ok(Json(ChatResponse::assistant(content)))
}
