//! HTTP routes for Keygate
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod health;
pub mod relay;
pub mod service;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration: any origin, the three methods the relay serves,
    // Content-Type as the only request header clients need
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(service::home))
        .route("/health", get(health::health_check))
        .route("/proxy/claude", post(relay::relay_claude))
        .route("/proxy/openai", post(relay::relay_openai))
        .route("/proxy/gemini", post(relay::relay_gemini))
        .fallback(service::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
