//! Keygate - minimal AI API relay
//!
//! This library provides the core functionality for the Keygate relay
//! server. It forwards client requests to AI providers with server-held
//! API keys injected, returning the provider response verbatim.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::proxy::{ClaudeClient, GeminiClient, OpenAIClient};

/// Application state shared across all request handlers
///
/// Immutable after startup: the credential set is read once from the
/// environment and injected here, never from ambient global state.
pub struct AppState {
    pub config: Config,
    pub claude: ClaudeClient,
    pub openai: OpenAIClient,
    pub gemini: GeminiClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // One pooled HTTP client shared by all provider clients, bounded
        // by the configured outbound timeout
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let claude = ClaudeClient::new(http_client.clone(), &config);
        let openai = OpenAIClient::new(http_client.clone(), &config);
        let gemini = GeminiClient::new(http_client, &config);

        Ok(Self {
            config,
            claude,
            openai,
            gemini,
        })
    }
}
