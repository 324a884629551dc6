//! Keygate - minimal AI API relay
//!
//! This is the main entry point for the Keygate relay server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing::{info, warn};

use keygate::{routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=info,tower_http=info".into()),
        )
        .with_target(true)
        .init();

    info!("Starting Keygate AI relay");

    // Load configuration
    let config = Config::from_env()?;
    report_credentials(&config);

    // Initialize application state
    let state = Arc::new(AppState::new(config.clone())?);

    // Build the router
    let app = routes::create_router(state);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {}", addr);

    // Create listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Keygate shutdown complete");
    Ok(())
}

/// Log which provider credentials were found at startup
///
/// Key lengths are logged, never key material.
fn report_credentials(config: &Config) {
    let providers = [
        ("claude", &config.claude_api_key),
        ("openai", &config.openai_api_key),
        ("gemini", &config.gemini_api_key),
    ];

    for (provider, key) in providers {
        match key {
            Some(key) => info!(provider, key_len = key.len(), "API key found"),
            None => warn!(provider, "No API key found; provider route disabled"),
        }
    }
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating shutdown");
        }
    }
}
