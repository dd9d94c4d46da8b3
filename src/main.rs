// timetable-relay - Gemini relay for timetable screenshot analysis
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use timetable_relay::cli::Args;
use timetable_relay::config::AppConfig;
use timetable_relay::gemini::GeminiClient;
use timetable_relay::server::create_router;
use timetable_relay::utils::logging;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting timetable-relay v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build Gemini client
    let gemini_client = GeminiClient::new(&config.gemini)?;
    if !gemini_client.is_configured() {
        warn!("Gemini API key is not configured; /analyze-image will answer 500 until GEMINI_API_KEY is set");
    }

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), gemini_client)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
