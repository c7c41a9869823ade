//! API Server Entry Point
//!
//! Loads configuration, initializes tracing, and serves the admin and blog
//! routers. Startup errors use `anyhow`; request errors are rendered by the
//! feature crates through `kernel::error::AppError`.

mod app;
mod config;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ApiConfig, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    if config.admin.password().is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set; every admin login will be rejected");
    }
    tracing::info!(
        app_env = ?config.app_env,
        content_dir = %config.content.content_root.display(),
        "Configuration loaded"
    );

    let addr = config.bind_addr;
    let app = app::build_router(config);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
