//! Gemini relay client
//!
//! Unlike the Claude and OpenAI routes, the Gemini route is not a raw
//! passthrough: only the `model` and `content` fields of the client
//! request are used, and the provider response is reshaped to
//! `{text, model}`.

use serde_json::{json, Value};
use tracing::error;

use crate::{
    config::Config,
    error::{AppError, AppResult},
};

/// Model used when the client request does not name one
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini generation client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Check if the client is configured with an API key
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate text for a single prompt
    ///
    /// Short-circuits without an outbound call when no key is configured.
    pub async fn generate(&self, model: &str, content: &str) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::ApiKeyMissing("Gemini"))?;

        // Gemini authenticates via a query parameter, not a header
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            api_key
        );

        let request_body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": content }]
            }]
        });

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach Gemini API");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, "Gemini API returned an error");
            return Err(AppError::Upstream(format!(
                "Gemini API error {}: {}",
                status, text
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Gemini API returned a non-JSON body");
            AppError::from(e)
        })?;

        Ok(extract_text(&payload))
    }
}

/// Extract the first candidate's text from a generateContent response
fn extract_text(payload: &Value) -> String {
    payload
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|cand| cand.get("content"))
        .and_then(|cont| cont.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str())
        .unwrap_or_default()
        .to_string()
}
