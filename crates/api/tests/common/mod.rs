#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use relief_api::app::build_app;
use relief_api::config::ServerConfig;
use relief_api::media::MediaStore;
use relief_api::state::AppState;
use relief_db::DbPool;

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "relief-test-boundary";

/// Contents of the test front-end document.
pub const INDEX_HTML: &str = "<!DOCTYPE html><title>relief</title>";

/// A bootstrapped database, upload directory and static directory inside
/// one temporary directory.
pub struct TestContext {
    pub dir: TempDir,
    pub state: AppState,
}

impl TestContext {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");

        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(static_dir.join("style.css"), "body { margin: 0; }").unwrap();

        let config = test_config(&dir);
        let pool = relief_db::create_pool(&config.database_url)
            .await
            .expect("open sqlite pool");
        relief_db::run_bootstrap(&pool).await.expect("bootstrap");

        let media = MediaStore::new(&config.upload_dir);
        media.ensure_root().await.unwrap();

        let state = AppState {
            pool,
            config: Arc::new(config),
            media: Arc::new(media),
        };

        Self { dir, state }
    }

    /// Build the full application router. Routers are consumed by
    /// `oneshot`, so build a fresh one per request.
    pub fn app(&self) -> Router {
        build_app(self.state.clone())
    }

    pub fn pool(&self) -> &DbPool {
        &self.state.pool
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.state.config.upload_dir.clone()
    }
}

/// Build a test `ServerConfig` rooted in `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: format!("sqlite://{}", dir.path().join("relief.db").display()),
        upload_dir: dir.path().join("uploads"),
        static_dir: dir.path().join("static"),
        cors_origins: vec![HeaderValue::from_static("http://localhost:5000")],
        request_timeout_secs: 30,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string().into_bytes()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a body built by [`multipart_body`].
pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    post_raw(app, uri, &content_type, body).await
}

/// Encode text fields and an optional `(field, filename, bytes)` file part
/// as a multipart body using [`BOUNDARY`].
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn incident_count(pool: &DbPool) -> i64 {
    relief_db::repositories::IncidentRepo::count(pool)
        .await
        .unwrap()
}
