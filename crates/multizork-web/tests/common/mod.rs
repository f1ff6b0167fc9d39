//! Shared test helpers for web integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use multizork_store::sqlite_store::SqliteTranscriptStore;
use multizork_transcripts::render::SiteConfig;
use multizork_web::state::AppState;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build the full app router over a `SqliteTranscriptStore`. Uses the same
/// router as `main.rs`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_site(pool, SiteConfig::default())
}

/// Build the full app router with custom site settings.
pub fn build_test_app_with_site(pool: SqlitePool, site: SiteConfig) -> Router {
    let store = Arc::new(SqliteTranscriptStore::new(pool));
    multizork_web::app(AppState::new(store, site))
}

/// Send a GET request and return the status, headers and body text.
pub async fn get_page(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, headers, body)
}
