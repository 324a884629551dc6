//! Health endpoint integration tests
//!
//! The availability flags must equal exactly the presence of each
//! configured credential.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestHarness;

#[tokio::test]
async fn test_health_reports_all_providers_available() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "status": "healthy",
            "available_models": {
                "claude": true,
                "openai": true,
                "gemini": true
            }
        })
    );
}

#[tokio::test]
async fn test_health_flags_track_credential_presence() {
    let harness = TestHarness::with_keys(None, Some("test-openai-api-key"), None).await;

    let response = harness.server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["available_models"]["claude"], false);
    assert_eq!(body["available_models"]["openai"], true);
    assert_eq!(body["available_models"]["gemini"], false);
}

#[tokio::test]
async fn test_health_with_no_credentials_at_all() {
    let harness = TestHarness::with_keys(None, None, None).await;

    let response = harness.server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["available_models"]["claude"], false);
    assert_eq!(body["available_models"]["openai"], false);
    assert_eq!(body["available_models"]["gemini"], false);
}

#[tokio::test]
async fn test_health_accepts_get_only() {
    let harness = TestHarness::new().await;

    let response = harness.server.post("/health").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
