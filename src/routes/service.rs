//! Service descriptor and fallback endpoints

use axum::Json;
use serde::Serialize;

use crate::error::AppError;

/// Static service descriptor returned from `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub endpoints: [&'static str; 4],
}

/// Simple home page with status info
pub async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "keygate",
        status: "active",
        endpoints: ["/health", "/proxy/claude", "/proxy/openai", "/proxy/gemini"],
    })
}

/// Fallback handler for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}
