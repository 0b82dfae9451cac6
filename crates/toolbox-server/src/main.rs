use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toolbox_core::WeatherClient;
use toolbox_server::app_state::AppState;
use toolbox_server::config::Config;
use toolbox_server::router::{create_router, mcp_endpoint};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    let registry = toolbox_mcp::default_registry(WeatherClient::new(config.weather()));
    tracing::info!("Registered tools: {}", registry.names().join(", "));

    let app = create_router(AppState::new(registry));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        environment = %config.environment,
        reload = config.reload(),
        "MCP server listening on {addr}, endpoint {}",
        mcp_endpoint()
    );
    if config.reload() {
        tracing::info!("Reload requested; run under an external watcher (e.g. `cargo watch -x run`) to restart on change");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
