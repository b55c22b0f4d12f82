// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::InMemoryUrlRecordRepo;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use storefront_seo::application::services::{ApplicationServices, SlugSettings};
use storefront_seo::domain::seo::{ReservedSlugs, UrlRecordRepository};
use storefront_seo::infrastructure::util::DefaultSlugGenerator;
use storefront_seo::presentation::http::state::HttpState;

pub const RESERVED: &[&str] = &["checkout", "admin", "cart"];

pub fn test_settings() -> SlugSettings {
    SlugSettings {
        reserved: ReservedSlugs::new(RESERVED),
        ..SlugSettings::default()
    }
}

/// モックリポジトリでサービスを組み立てる
pub fn build_services(repo: Arc<InMemoryUrlRecordRepo>) -> ApplicationServices {
    build_services_with(repo, test_settings())
}

pub fn build_services_with(
    repo: Arc<InMemoryUrlRecordRepo>,
    settings: SlugSettings,
) -> ApplicationServices {
    let repo: Arc<dyn UrlRecordRepository> = repo;
    ApplicationServices::new(repo, Arc::new(DefaultSlugGenerator), settings)
}

pub fn make_test_router(repo: Arc<InMemoryUrlRecordRepo>) -> axum::Router {
    let services = Arc::new(build_services(repo));
    storefront_seo::presentation::http::routes::build_router(HttpState { services })
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
