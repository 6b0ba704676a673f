//! Health check, request ids, OpenAPI document and unknown routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, test_pool};
use http_body_util::BodyExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = get(build_test_app(test_pool().await), "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = get(build_test_app(test_pool().await), "/api/breeds").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn openapi_document_lists_module_paths() {
    let response = get(build_test_app(test_pool().await), "/docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let spec = body_json(response).await;
    assert!(spec["paths"]["/api/dogs"]["get"].is_object());
    assert!(spec["paths"]["/api/dogs/{id}"]["get"].is_object());
    assert!(spec["paths"]["/api/breeds"]["get"].is_object());
    assert!(spec["components"]["schemas"]["DogDetail"].is_object());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(test_pool().await), "/api/cats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
