//! # swv-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Configuration comes from the environment;
//! see [`AppConfig::from_env`].

use swv_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "loaded configuration");
    if config.auth_token.is_none() {
        tracing::warn!("AUTH_TOKEN not set; API routes are unauthenticated");
    }

    let port = config.port;
    let app = swv_api::app(AppState::with_config(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("swagger validator API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
