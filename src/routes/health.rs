//! Health check endpoint
//!
//! Reports per-provider availability, computed as "credential present".

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Per-provider availability flags
#[derive(Debug, Serialize)]
pub struct AvailableModels {
    pub claude: bool,
    pub openai: bool,
    pub gemini: bool,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub available_models: AvailableModels,
}

/// Simple health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        available_models: AvailableModels {
            claude: state.claude.is_configured(),
            openai: state.openai.is_configured(),
            gemini: state.gemini.is_configured(),
        },
    })
}
