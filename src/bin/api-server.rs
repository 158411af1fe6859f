//! Trendlens Dashboard API Server
//!
//! Serves indicator and signal analysis of uploaded OHLCV tables to the
//! dashboard front-end. Stateless; every request is an independent run.

use dotenvy::dotenv;
use std::env;
use tokio::signal;
use tracing::{error, info};
use trendlens::core::http::start_server;
use trendlens::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let env = trendlens::config::get_environment();
    info!("Starting Trendlens API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
