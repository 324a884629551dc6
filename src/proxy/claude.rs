//! Claude relay client
//!
//! Forwards request bodies unaltered to the Claude messages endpoint and
//! hands back the upstream status and JSON body for verbatim passthrough.

use axum::http::StatusCode;
use serde_json::Value;
use tracing::error;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::headers::claude_headers,
};

/// Claude relay client
pub struct ClaudeClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl ClaudeClient {
    /// Create a new Claude client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.claude_api_url.clone(),
            api_key: config.claude_api_key.clone(),
        }
    }

    /// Check if the client is configured with an API key
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Forward a request body to Claude, unaltered
    ///
    /// Returns the upstream status code and JSON body, whatever they are.
    /// Short-circuits without an outbound call when no key is configured.
    pub async fn forward(&self, payload: &Value) -> AppResult<(StatusCode, Value)> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::ApiKeyMissing("Claude"))?;

        let response = self
            .client
            .post(&self.api_url)
            .headers(claude_headers(api_key))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach Claude API");
                AppError::from(e)
            })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Claude API returned a non-JSON body");
            AppError::from(e)
        })?;

        Ok((status, body))
    }
}
