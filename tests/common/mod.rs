//! Common test utilities for Keygate
//!
//! Provides the shared test harness used across the integration tests: a
//! real router over a configuration pointed at wiremock provider servers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use keygate::{routes, AppState, Config};

use crate::mocks::providers::{MockClaude, MockGemini, MockOpenAI};

/// Test configuration constants
pub mod constants {
    /// Default test API key for Claude
    pub const TEST_CLAUDE_API_KEY: &str = "test-claude-api-key";
    /// Default test API key for OpenAI
    pub const TEST_OPENAI_API_KEY: &str = "test-openai-api-key";
    /// Default test API key for Gemini
    pub const TEST_GEMINI_API_KEY: &str = "test-gemini-api-key";
    /// Outbound timeout used by test configs, kept short so timeout tests
    /// stay fast
    pub const TEST_TIMEOUT_SECS: u64 = 2;
}

/// Test harness for black-box relay tests
///
/// Creates a complete test environment with one wiremock server per
/// provider and a real app router served by `axum_test::TestServer`.
///
/// # Example
///
/// ```ignore
/// let harness = TestHarness::new().await;
/// harness.openai.mock_response(200, json!({"ok": true})).await;
///
/// let response = harness.server
///     .post("/proxy/openai")
///     .json(&json!({"model": "gpt-4", "messages": []}))
///     .await;
/// response.assert_status_ok();
/// ```
pub struct TestHarness {
    pub server: TestServer,
    pub claude: MockClaude,
    pub openai: MockOpenAI,
    pub gemini: MockGemini,
}

impl TestHarness {
    /// Create a harness with every provider credential configured
    pub async fn new() -> Self {
        Self::with_keys(
            Some(constants::TEST_CLAUDE_API_KEY),
            Some(constants::TEST_OPENAI_API_KEY),
            Some(constants::TEST_GEMINI_API_KEY),
        )
        .await
    }

    /// Create a harness with an explicit credential set
    ///
    /// `None` for a provider exercises the missing-key short-circuit.
    pub async fn with_keys(
        claude_key: Option<&str>,
        openai_key: Option<&str>,
        gemini_key: Option<&str>,
    ) -> Self {
        let claude = MockClaude::start().await;
        let openai = MockOpenAI::start().await;
        let gemini = MockGemini::start().await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS assign port
            claude_api_url: claude.endpoint(),
            claude_api_key: claude_key.map(String::from),
            openai_api_url: openai.endpoint(),
            openai_api_key: openai_key.map(String::from),
            gemini_api_url: gemini.uri(),
            gemini_api_key: gemini_key.map(String::from),
            request_timeout_secs: constants::TEST_TIMEOUT_SECS,
        };

        let server = TestServer::new(build_router(config)).expect("Failed to create test server");

        Self {
            server,
            claude,
            openai,
            gemini,
        }
    }
}

/// Build a real application router for a test configuration
pub fn build_router(config: Config) -> Router {
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    routes::create_router(state)
}

/// A configuration whose provider endpoints point nowhere
///
/// Useful for tests that never trigger an outbound call (CORS preflight,
/// 404 fallback, missing-key short-circuits).
pub fn offline_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        claude_api_url: "http://127.0.0.1:9/v1/messages".to_string(),
        claude_api_key: None,
        openai_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        openai_api_key: None,
        gemini_api_url: "http://127.0.0.1:9/v1beta".to_string(),
        gemini_api_key: None,
        request_timeout_secs: constants::TEST_TIMEOUT_SECS,
    }
}
