//! Configuration management for Keygate
//!
//! Configuration is loaded from environment variables once at startup.
//! Missing provider keys are not an error; they only disable that
//! provider's route.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Claude messages endpoint URL
    pub claude_api_url: String,
    /// Claude API key (CLAUDE_API_KEY, falling back to ANTHROPIC_API_KEY)
    pub claude_api_key: Option<String>,

    /// OpenAI chat completions endpoint URL
    pub openai_api_url: String,
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Timeout for outbound provider calls (in seconds)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("KEYGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("KEYGATE_PORT")
                .unwrap_or_else(|_| "3340".to_string())
                .parse()
                .context("Invalid KEYGATE_PORT")?,

            claude_api_url: env::var("CLAUDE_API_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".to_string()),
            claude_api_key: env::var("CLAUDE_API_KEY")
                .or_else(|_| env::var("ANTHROPIC_API_KEY"))
                .ok(),

            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS")?,
        })
    }
}
