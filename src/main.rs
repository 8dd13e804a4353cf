//! AI photo studio - the front end server.
//!
//! Serves the studio page and relays each submission to the processing
//! service configured by `STUDIO_API_BASE`.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use studio::{build_router, AppState, Config};

// ============================================================================
// Main
// ============================================================================

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("studio=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    init_logging();

    let state = Arc::new(AppState::new(config.clone()));
    let app = build_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "studio running");
    info!(api_base = %config.api_base, "processing service");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
