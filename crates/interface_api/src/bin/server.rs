//! Grant Review API Server Binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin grant-api
//!
//! API_PORT=9000 API_SCORE_SEED=2024 API_SEED_REFERENCE_DATA=true cargo run --bin grant-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_SCORE_SEED` - Seed for reproducible expert scores
//! * `API_SEED_REFERENCE_DATA` - Register reference experts, applicant and founder
//! * `API_CURRENCY` - Currency every application requests in (default: USD)
//! * `API_ENFORCE_REQUESTED_CAP` - Reject grants above the requested amount
//! * `API_SELECTION_STRATEGY` - by_specialization, qualification_threshold or round_robin
//! * `API_SELECTION_MINIMUM` - Minimum qualification for qualification_threshold
//! * `API_SELECTION_TEAM_SIZE` - Team size for round_robin

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use interface_api::{bootstrap, create_router, config::ApiConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        strategy = %config.selection_strategy,
        "Starting Grant Review API Server"
    );

    let service = bootstrap::build_service(&config).context("invalid workflow configuration")?;
    if config.seed_reference_data {
        bootstrap::seed_reference_data(&service)
            .await
            .context("failed to register reference data")?;
    }

    let app = create_router(Arc::new(service), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from `API_` variables, falling back to defaults
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Falling back to default configuration: {e}");
        ApiConfig::default()
    })
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
