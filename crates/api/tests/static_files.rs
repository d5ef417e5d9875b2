//! Integration tests for the static front end and uploaded media.

mod common;

use axum::http::StatusCode;

use common::*;

#[tokio::test]
async fn root_serves_index_document() {
    let ctx = TestContext::new().await;

    let response = get(ctx.app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await.as_ref(), INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn assets_are_served_by_path() {
    let ctx = TestContext::new().await;

    let response = get(ctx.app(), "/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let ctx = TestContext::new().await;
    let response = get(ctx.app(), "/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_traversal_is_refused() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.dir.path().join("secret.txt"), "hidden").unwrap();

    let response = get(ctx.app(), "/../secret.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_upload_is_not_found() {
    let ctx = TestContext::new().await;

    let response = get(ctx.app(), "/uploads/nothing.jpg").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn upload_traversal_is_refused() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.dir.path().join("secret.txt"), "hidden").unwrap();

    let response = get(ctx.app(), "/uploads/..%2Fsecret.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
