use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use shared::Page;

use crate::AppState;

const INDEX: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "../frontend/dist/"]
#[allow_missing = true]
struct Assets;

/// Where the built front-end is read from.
pub trait AssetSource: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        Assets::get(path).map(|file| file.data)
    }
}

pub fn has_index(assets: &dyn AssetSource) -> bool {
    assets.get(INDEX).is_some()
}

fn asset_response(status: StatusCode, mime: &str, content: Cow<'static, [u8]>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, mime.to_string())],
        Body::from(content.into_owned()),
    )
        .into_response()
}

pub async fn static_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };

    // Try to serve the exact file
    if let Some(content) = state.assets.get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return asset_response(StatusCode::OK, mime.as_ref(), content);
    }

    // Client-side routes get the app shell; anything else gets it with a 404
    // so the router can render its not-found page.
    let status = if Page::from_path(uri.path()).is_some() {
        StatusCode::OK
    } else {
        tracing::debug!(path = uri.path(), "no page or asset for path");
        StatusCode::NOT_FOUND
    };

    match state.assets.get(INDEX) {
        Some(content) => asset_response(status, "text/html; charset=utf-8", content),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
