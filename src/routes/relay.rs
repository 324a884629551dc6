//! Relay endpoints
//!
//! One POST handler per provider. Each request is independent, stateless,
//! and fully resolved within a single outbound call; nothing is retried
//! or queued.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{error::AppError, proxy::gemini, AppState};

/// Response shape for the Gemini route
#[derive(Debug, Serialize)]
pub struct GeminiRelayResponse {
    pub text: String,
    pub model: String,
}

/// Parse a request body leniently
///
/// An absent or malformed JSON body is treated as an empty object, not a
/// hard failure.
fn lenient_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| json!({}))
}

/// Model named by the request, for logging
fn requested_model<'a>(payload: &'a Value, default: &'a str) -> &'a str {
    payload
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or(default)
}

/// Proxy requests to the Claude API
///
/// The body is forwarded as-is; the upstream status and JSON body come
/// back verbatim.
pub async fn relay_claude(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = lenient_json(&body);
    info!(
        model = requested_model(&payload, "unspecified"),
        "Claude relay request"
    );

    let (status, upstream) = state.claude.forward(&payload).await?;
    Ok((status, Json(upstream)).into_response())
}

/// Proxy requests to the OpenAI API
///
/// The body is forwarded as-is; the upstream status and JSON body come
/// back verbatim.
pub async fn relay_openai(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = lenient_json(&body);
    info!(
        model = requested_model(&payload, "unspecified"),
        "OpenAI relay request"
    );

    let (status, upstream) = state.openai.forward(&payload).await?;
    Ok((status, Json(upstream)).into_response())
}

/// Proxy requests to the Gemini API
///
/// Only the `model` and `content` fields are read; the response is
/// reshaped to `{text, model}`.
pub async fn relay_gemini(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = lenient_json(&body);
    let model = requested_model(&payload, gemini::DEFAULT_MODEL);
    let content = payload
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default();

    info!(model, "Gemini relay request");

    let text = state.gemini.generate(model, content).await?;

    Ok((
        StatusCode::OK,
        Json(GeminiRelayResponse {
            text,
            model: model.to_string(),
        }),
    )
        .into_response())
}
