use crate::types::RootResponse;
use axum::Json;

/// API root greeting
#[utoipa::path(
    get,
    path = "/api/",
    responses((status = 200, description = "Greeting", body = RootResponse)),
    tag = "system"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up", body = String)),
    tag = "system"
)]
pub async fn health() -> &'static str {
    "OK"
}
