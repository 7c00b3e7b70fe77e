pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::static_files;
use crate::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Static files (frontend) - fallback for everything else
        .fallback(static_files::static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::collections::HashMap;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use tower::util::ServiceExt;

    use super::*;
    use crate::static_files::AssetSource;

    const SHELL: &str = "<!DOCTYPE html><html><body>shell</body></html>";

    #[derive(Default)]
    struct MemoryAssets(HashMap<String, Vec<u8>>);

    impl MemoryAssets {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.0.insert(path.to_string(), content.as_bytes().to_vec());
            self
        }
    }

    impl AssetSource for MemoryAssets {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            self.0.get(path).map(|bytes| Cow::Owned(bytes.clone()))
        }
    }

    fn app(assets: MemoryAssets) -> Router {
        build_router(Arc::new(AppState {
            assets: Arc::new(assets),
        }))
    }

    fn built_site() -> MemoryAssets {
        MemoryAssets::default()
            .with("index.html", SHELL)
            .with("frontend-1a2b.js", "export default function init() {}")
            .with("styles.css", "body { margin: 0; }")
    }

    async fn get(app: Router, uri: &str) -> Response {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(resp: &Response) -> &str {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn root_serves_the_app_shell() {
        let resp = get(app(built_site()), "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
        assert_eq!(body_string(resp).await, SHELL);
    }

    #[tokio::test]
    async fn client_routes_serve_the_app_shell() {
        for uri in ["/login", "/signup", "/login/", "/signup?ref=header"] {
            let resp = get(app(built_site()), uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert!(content_type(&resp).starts_with("text/html"), "{uri}");
            assert_eq!(body_string(resp).await, SHELL, "{uri}");
        }
    }

    #[tokio::test]
    async fn assets_are_served_with_their_mime_type() {
        let resp = get(app(built_site()), "/styles.css").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/css");
        assert_eq!(body_string(resp).await, "body { margin: 0; }");

        let resp = get(app(built_site()), "/frontend-1a2b.js").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));
    }

    #[tokio::test]
    async fn unknown_paths_get_the_shell_with_not_found() {
        let resp = get(app(built_site()), "/facts").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(resp).await, SHELL);
    }

    #[tokio::test]
    async fn missing_build_is_plain_not_found() {
        let resp = get(app(MemoryAssets::default()), "/login").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(resp).await, "Not Found");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = get(app(MemoryAssets::default()), "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
