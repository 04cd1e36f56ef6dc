use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movierack_rs::config::Config;
use movierack_rs::db::MemoryRepository;
use movierack_rs::server::{build_router, AppState};

/// Build the application router with the full middleware stack, backed by
/// a fresh in-memory repository. Mirrors the router construction in
/// `run()` so tests exercise the same layers production uses.
pub fn build_test_app() -> Router {
    let db = Arc::new(MemoryRepository::new());
    build_router(AppState::new(Config::default(), db))
}

/// Send a request, attaching `body` as JSON when present.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a request with a raw body, still labelled as JSON. Used for
/// syntactically broken payloads that `serde_json::Value` cannot express.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
