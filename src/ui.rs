//! Embedded web client
//!
//! Serves the compiled Leptos app from `ui/dist`. Unknown paths fall back to
//! `index.html` so client-side routes such as `/chat` survive a reload.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct UiAssets;

const INDEX: &str = "index.html";

fn asset_response(path: &str, data: std::borrow::Cow<'static, [u8]>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref())], Body::from(data.into_owned())).into_response()
}

/// Fallback handler for every non-API path
pub async fn serve_ui(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = UiAssets::get(path) {
        return asset_response(path, file.data);
    }

    match UiAssets::get(INDEX) {
        Some(index) => asset_response(INDEX, index.data),
        None => (StatusCode::NOT_FOUND, "UI assets not built").into_response(),
    }
}
