//! Header construction for provider requests
//!
//! Client headers are intentionally NOT forwarded upstream; every outbound
//! request carries exactly the header set the provider requires, with the
//! server-held credential injected.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// API version pinned for the Claude messages endpoint
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");
const ANTHROPIC_VERSION_HEADER: HeaderName = HeaderName::from_static("anthropic-version");

/// Build the header set for Claude requests
///
/// Claude requires BOTH the named API-key header and the bearer
/// authorization header carrying the same secret. This is a provider
/// quirk, not redundancy.
pub fn claude_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        X_API_KEY,
        HeaderValue::from_str(api_key).expect("Invalid API key format"),
    );
    headers.insert(
        ANTHROPIC_VERSION_HEADER,
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).expect("Invalid API key format"),
    );

    headers
}

/// Build the header set for OpenAI requests
pub fn openai_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).expect("Invalid API key format"),
    );

    headers
}
