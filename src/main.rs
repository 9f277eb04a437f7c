//! edge-pulse server binary.
//!
//! Resolves configuration from the environment, initializes structured
//! logging, binds the configured address, and serves the informational
//! endpoints until terminated.

use tokio::net::TcpListener;

use edge_pulse::config;
use edge_pulse::http::HttpServer;
use edge_pulse::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_process_env()?;

    logging::init(&config);

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        app_name = %config.app_name,
        version = %config.app_version,
        "edge-pulse starting"
    );

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
